//! DS18B20 waterproof temperature probe on a 1-Wire bus.
//!
//! Every read requests a conversion on all probes and returns the first
//! one. A missing probe or failed conversion reads as NaN.

use log::{debug, info};

use crate::error::SensorError;
use crate::ports::ProbeBus;

pub struct TemperatureProbe<B> {
    bus: B,
    devices: usize,
    last_temperature: f32,
}

impl<B: ProbeBus> TemperatureProbe<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            devices: 0,
            last_temperature: f32::NAN,
        }
    }

    /// Enumerate the bus. Returns the number of probes found.
    pub fn initialize(&mut self) -> Result<usize, SensorError> {
        self.devices = self.bus.begin()?;
        info!("probe: {} device(s) on bus", self.devices);
        Ok(self.devices)
    }

    /// Temperature of the first probe in °C, NaN on failure.
    pub fn read_temperature(&mut self) -> f32 {
        self.last_temperature = self.read_index(0).unwrap_or_else(|e| {
            debug!("probe: read failed: {}", e);
            f32::NAN
        });
        self.last_temperature
    }

    /// Temperature of the probe at `index`.
    pub fn read_index(&mut self, index: usize) -> Result<f32, SensorError> {
        if index >= self.devices {
            return Err(SensorError::NoDevice);
        }
        self.bus.request_temperatures()?;
        let t = self.bus.temperature_c(index)?;
        if t.is_nan() {
            return Err(SensorError::InvalidReading);
        }
        Ok(t)
    }

    /// `true` iff the last `read_temperature()` was numeric.
    pub fn is_valid(&self) -> bool {
        !self.last_temperature.is_nan()
    }

    pub fn device_count(&self) -> usize {
        self.devices
    }
}
