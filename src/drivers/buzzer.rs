//! Active buzzer on a single push-pull output.
//!
//! `alert()` blocks the caller for the whole beep. There is no scheduler
//! on this node, so nothing else runs while the buzzer sounds.
//!
//! ## Dual-target design
//!
//! Generic over `OutputPin` and `DelayNs`: `GpioOutput` + `FreeRtos` on
//! hardware, mocks in tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::debug;

use crate::error::ActuatorError;

pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
    active: bool,
}

impl<P: OutputPin, D: DelayNs> Buzzer<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            pin,
            delay,
            active: false,
        }
    }

    /// Drive the pin low. Called once at startup.
    pub fn initialize(&mut self) -> Result<(), ActuatorError> {
        self.deactivate()
    }

    pub fn activate(&mut self) -> Result<(), ActuatorError> {
        self.pin.set_high().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) -> Result<(), ActuatorError> {
        self.pin.set_low().map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.active = false;
        Ok(())
    }

    /// Sound for `duration_ms`, then silence. Blocking.
    pub fn alert(&mut self, duration_ms: u32) -> Result<(), ActuatorError> {
        debug!("buzzer: alert {} ms", duration_ms);
        self.activate()?;
        self.delay.delay_ms(duration_ms);
        self.deactivate()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
