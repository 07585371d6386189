//! DS18B20 adapter (`ds18b20` + `one-wire-bus` crates) for the
//! [`ProbeBus`] port.
//!
//! Generic over `embedded-hal` 0.2 pins and delays. An empty bus is not an
//! error here: `begin()` returns 0 and the wrapper reports `NoDevice`.

use ds18b20::{Ds18b20, Resolution};
use embedded_hal_0_2::blocking::delay::{DelayMs, DelayUs};
use embedded_hal_0_2::digital::v2::{InputPin, OutputPin};
use log::{debug, info};
use one_wire_bus::{OneWire, OneWireError};

use crate::error::SensorError;
use crate::ports::ProbeBus;

const MAX_PROBES: usize = 4;

pub struct OneWireProbeBus<P, D> {
    bus: OneWire<P>,
    delay: D,
    probes: heapless::Vec<Ds18b20, MAX_PROBES>,
}

fn map_err<E: core::fmt::Debug>(e: OneWireError<E>) -> SensorError {
    debug!("ds18b20: {:?}", e);
    match e {
        OneWireError::CrcMismatch => SensorError::ChecksumMismatch,
        OneWireError::Timeout => SensorError::Timeout,
        OneWireError::FamilyCodeMismatch | OneWireError::UnexpectedResponse => {
            SensorError::InvalidReading
        }
        OneWireError::BusNotHigh | OneWireError::PinError(_) => SensorError::BusFault,
    }
}

impl<P, D, E> OneWireProbeBus<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayUs<u16> + DelayMs<u16>,
    E: core::fmt::Debug,
{
    /// `pin` must be open-drain with an external 4.7 kΩ pull-up.
    pub fn new(pin: P, delay: D) -> Result<Self, SensorError> {
        Ok(Self {
            bus: OneWire::new(pin).map_err(map_err)?,
            delay,
            probes: heapless::Vec::new(),
        })
    }
}

impl<P, D, E> ProbeBus for OneWireProbeBus<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayUs<u16> + DelayMs<u16>,
    E: core::fmt::Debug,
{
    fn begin(&mut self) -> Result<usize, SensorError> {
        self.probes.clear();
        for address in self.bus.devices(false, &mut self.delay) {
            let address = address.map_err(map_err)?;
            if address.family_code() != ds18b20::FAMILY_CODE {
                continue;
            }
            let probe = Ds18b20::new::<E>(address).map_err(map_err)?;
            if self.probes.push(probe).is_err() {
                info!("ds18b20: more than {} probes, ignoring the rest", MAX_PROBES);
                break;
            }
        }
        Ok(self.probes.len())
    }

    fn request_temperatures(&mut self) -> Result<(), SensorError> {
        ds18b20::start_simultaneous_temp_measurement(&mut self.bus, &mut self.delay)
            .map_err(map_err)?;
        Resolution::Bits12.delay_for_measurement_time(&mut self.delay);
        Ok(())
    }

    fn temperature_c(&mut self, index: usize) -> Result<f32, SensorError> {
        let probe = self.probes.get(index).ok_or(SensorError::NoDevice)?;
        probe
            .read_data(&mut self.bus, &mut self.delay)
            .map(|data| data.temperature)
            .map_err(map_err)
    }
}
