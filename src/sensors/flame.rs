//! Analog flame (IR photodiode) sensor.
//!
//! The module's analog output rises with IR intensity. A flame is reported
//! when the raw ADC sample is strictly above the configured threshold.

use crate::ports::AnalogInput;
use crate::sensors::threshold::ThresholdSensor;

pub struct FlameSensor<A> {
    sensor: ThresholdSensor<A>,
    threshold: u16,
}

impl<A: AnalogInput> FlameSensor<A> {
    pub fn new(input: A, threshold: u16) -> Self {
        Self {
            sensor: ThresholdSensor::new(input),
            threshold,
        }
    }

    pub fn initialize(&mut self) {
        self.sensor.initialize();
    }

    pub fn read_raw(&mut self) -> u16 {
        self.sensor.read_raw()
    }

    pub fn is_flame_detected(&mut self) -> bool {
        self.sensor.detect(self.threshold)
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }
}
