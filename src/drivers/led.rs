//! Green / red status LED pair.
//!
//! Two discrete LEDs on push-pull outputs. At most one is lit: every
//! setter writes both pins.
//!
//! ## Dual-target design
//!
//! Generic over `embedded_hal::digital::OutputPin`: [`GpioOutput`] on
//! hardware and in simulation, mocks in tests.
//!
//! [`GpioOutput`]: crate::drivers::hw_init::GpioOutput

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedState {
    #[default]
    Off,
    Green,
    Red,
}

pub struct StatusLeds<G, R> {
    green: G,
    red: R,
    state: LedState,
}

impl<G: OutputPin, R: OutputPin> StatusLeds<G, R> {
    pub fn new(green: G, red: R) -> Self {
        Self {
            green,
            red,
            state: LedState::Off,
        }
    }

    /// Drive both outputs low. Called once at startup.
    pub fn initialize(&mut self) -> Result<(), ActuatorError> {
        self.clear()
    }

    pub fn set_green(&mut self) -> Result<(), ActuatorError> {
        // Clear before set so both never light together.
        self.red.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.green.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.state = LedState::Green;
        Ok(())
    }

    pub fn set_red(&mut self) -> Result<(), ActuatorError> {
        self.green.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.red.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.state = LedState::Red;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), ActuatorError> {
        self.green.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.red.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.state = LedState::Off;
        Ok(())
    }

    /// Apply a state in one call.
    pub fn set(&mut self, state: LedState) -> Result<(), ActuatorError> {
        match state {
            LedState::Off => self.clear(),
            LedState::Green => self.set_green(),
            LedState::Red => self.set_red(),
        }
    }

    pub fn state(&self) -> LedState {
        self.state
    }

    /// Hand the pins back (mainly for tests).
    pub fn release(self) -> (G, R) {
        (self.green, self.red)
    }
}
