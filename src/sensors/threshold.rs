//! Generic analog threshold sensor.
//!
//! Reads one ADC channel and compares the sample against a threshold.
//! No debouncing, hysteresis or filtering: a single noisy sample can flip
//! the result.

use crate::ports::AnalogInput;

pub struct ThresholdSensor<A> {
    input: A,
    factor: f32,
}

impl<A: AnalogInput> ThresholdSensor<A> {
    /// Raw samples are reported unscaled.
    pub fn new(input: A) -> Self {
        Self::with_factor(input, 1.0)
    }

    /// `read_level()` reports `raw * factor`.
    pub fn with_factor(input: A, factor: f32) -> Self {
        Self { input, factor }
    }

    /// Configure the input channel. Called once at startup.
    pub fn initialize(&mut self) {
        self.input.configure();
    }

    pub fn read_raw(&mut self) -> u16 {
        self.input.read_raw()
    }

    /// `true` iff a fresh raw sample is strictly above `threshold`.
    pub fn detect(&mut self, threshold: u16) -> bool {
        self.read_raw() > threshold
    }

    /// A fresh sample scaled by the configured factor.
    pub fn read_level(&mut self) -> f32 {
        f32::from(self.read_raw()) * self.factor
    }

    /// `true` iff the scaled level is strictly above `threshold`.
    pub fn exceeds(&mut self, threshold: f32) -> bool {
        self.read_level() > threshold
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}
