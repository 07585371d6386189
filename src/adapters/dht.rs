//! DHT11 adapter (`dht-sensor` crate) for the [`HygrometerDriver`] port.
//!
//! One bus transaction yields both temperature and humidity. The sensor
//! needs about 2 s between transactions, so a reading is reused for that
//! long; calling `read_temperature` then `read_humidity` costs one
//! transaction.

use dht_sensor::{dht11, DhtError, DhtReading};
use embedded_hal_0_2::blocking::delay::{DelayMs, DelayUs};
use embedded_hal_0_2::digital::v2::{InputPin, OutputPin};
use log::debug;

use crate::error::SensorError;
use crate::ports::HygrometerDriver;

/// Minimum spacing between DHT11 transactions.
const MIN_INTERVAL_US: i64 = 2_000_000;

pub struct Dht11Driver<P, D> {
    pin: P,
    delay: D,
    last: Option<(i64, dht11::Reading)>,
}

impl<P, D, E> Dht11Driver<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayUs<u8> + DelayMs<u8>,
    E: core::fmt::Debug,
{
    /// `pin` must be open-drain with a pull-up.
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            pin,
            delay,
            last: None,
        }
    }

    fn reading(&mut self) -> Result<dht11::Reading, SensorError> {
        // SAFETY: esp_timer_get_time has no preconditions.
        let now = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
        if let Some((at, reading)) = self.last {
            if now - at < MIN_INTERVAL_US {
                return Ok(reading);
            }
        }
        let reading = dht11::Reading::read(&mut self.delay, &mut self.pin).map_err(|e| {
            debug!("dht11: {:?}", e);
            match e {
                DhtError::ChecksumMismatch => SensorError::ChecksumMismatch,
                DhtError::Timeout => SensorError::Timeout,
                DhtError::PinError(_) => SensorError::BusFault,
            }
        })?;
        self.last = Some((now, reading));
        Ok(reading)
    }
}

impl<P, D, E> HygrometerDriver for Dht11Driver<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayUs<u8> + DelayMs<u8>,
    E: core::fmt::Debug,
{
    fn begin(&mut self) -> Result<(), SensorError> {
        // Idle high, then give the sensor a second to settle.
        self.pin.set_high().map_err(|_| SensorError::BusFault)?;
        for _ in 0..4 {
            self.delay.delay_ms(250);
        }
        self.last = None;
        Ok(())
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.reading().map(|r| f32::from(r.temperature))
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        self.reading().map(|r| f32::from(r.relative_humidity))
    }
}
