//! MQ-series gas sensors (MQ-2 combustible gas, MQ-135 air quality).
//!
//! Both expose the heater-divider voltage on an analog pin. The reported
//! level is the raw sample times a fixed linear factor; there is no curve
//! fitting or R0 calibration.

use crate::ports::AnalogInput;
use crate::sensors::threshold::ThresholdSensor;

/// MQ-2 combustible gas / smoke sensor.
pub struct Mq2<A> {
    sensor: ThresholdSensor<A>,
}

impl<A: AnalogInput> Mq2<A> {
    pub fn new(input: A, factor: f32) -> Self {
        Self {
            sensor: ThresholdSensor::with_factor(input, factor),
        }
    }

    pub fn initialize(&mut self) {
        self.sensor.initialize();
    }

    pub fn read_gas_concentration(&mut self) -> f32 {
        self.sensor.read_level()
    }

    pub fn is_gas_detected(&mut self, threshold: f32) -> bool {
        self.sensor.exceeds(threshold)
    }
}

/// MQ-135 air-quality sensor (NH3, NOx, benzene, smoke, CO2).
pub struct Mq135<A> {
    sensor: ThresholdSensor<A>,
}

impl<A: AnalogInput> Mq135<A> {
    pub fn new(input: A, calibration_factor: f32) -> Self {
        Self {
            sensor: ThresholdSensor::with_factor(input, calibration_factor),
        }
    }

    pub fn initialize(&mut self) {
        self.sensor.initialize();
    }

    pub fn read_air_quality(&mut self) -> f32 {
        self.sensor.read_level()
    }

    pub fn is_gas_detected(&mut self, threshold: f32) -> bool {
        self.sensor.exceeds(threshold)
    }

    pub fn calibration_factor(&self) -> f32 {
        self.sensor.factor()
    }
}
