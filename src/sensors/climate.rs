//! DHT11 humidity / temperature sensor wrapper.
//!
//! Delegates every read to a [`HygrometerDriver`]. A failed driver read is
//! reported as NaN, the same way the vendor DHT library does.
//!
//! The last temperature and humidity are cached; [`ClimateSensor::is_valid`]
//! inspects that cache and never triggers a new measurement. Two
//! consecutive `is_valid()` calls therefore always agree.

use log::debug;
use serde::Serialize;

use crate::error::SensorError;
use crate::ports::HygrometerDriver;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

pub struct ClimateSensor<D> {
    driver: D,
    last_temperature: f32,
    last_humidity: f32,
}

impl<D: HygrometerDriver> ClimateSensor<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            last_temperature: f32::NAN,
            last_humidity: f32::NAN,
        }
    }

    pub fn initialize(&mut self) -> Result<(), SensorError> {
        self.driver.begin()
    }

    /// Temperature in °C, NaN when the driver read fails.
    pub fn read_temperature(&mut self) -> f32 {
        self.last_temperature = self.driver.read_temperature().unwrap_or_else(|e| {
            debug!("dht: temperature read failed: {}", e);
            f32::NAN
        });
        self.last_temperature
    }

    /// Relative humidity in %, NaN when the driver read fails.
    pub fn read_humidity(&mut self) -> f32 {
        self.last_humidity = self.driver.read_humidity().unwrap_or_else(|e| {
            debug!("dht: humidity read failed: {}", e);
            f32::NAN
        });
        self.last_humidity
    }

    /// `true` iff the last temperature and humidity reads were both numeric.
    pub fn is_valid(&self) -> bool {
        !self.last_temperature.is_nan() && !self.last_humidity.is_nan()
    }

    /// Read both values; `InvalidReading` if either is NaN.
    pub fn sample(&mut self) -> Result<ClimateReading, SensorError> {
        self.read_temperature();
        self.read_humidity();
        self.last().ok_or(SensorError::InvalidReading)
    }

    /// The cached pair, if valid.
    pub fn last(&self) -> Option<ClimateReading> {
        self.is_valid().then_some(ClimateReading {
            temperature_c: self.last_temperature,
            humidity_pct: self.last_humidity,
        })
    }
}
