//! Character LCD screens (HD44780 behind a PCF8574 I²C backpack).
//!
//! Three fixed screens: welcome, sensor readings and alert. Every screen
//! clears the panel and redraws all of its lines. Text longer than the
//! panel is cut at the last column; lines below the last row are dropped.

use core::fmt::Write;

use log::debug;

use crate::config::LcdConfig;
use crate::error::ActuatorError;
use crate::ports::CharacterDisplay;

/// Longest formatted line, independent of panel width.
type Line = heapless::String<64>;

pub const WELCOME_TITLE: &str = "Smart Building";
pub const WELCOME_SUBTITLE: &str = "Monitoring Sys";
pub const ALERT_BANNER: &str = "ALERT!";

pub struct LcdDisplay<D> {
    driver: D,
    layout: LcdConfig,
}

impl<D: CharacterDisplay> LcdDisplay<D> {
    /// Initialise the controller and switch the backlight on.
    pub fn new(mut driver: D, layout: LcdConfig) -> Result<Self, ActuatorError> {
        driver.init()?;
        driver.set_backlight(true)?;
        debug!(
            "lcd: ready at 0x{:02X} ({}x{})",
            layout.i2c_address, layout.columns, layout.rows
        );
        Ok(Self { driver, layout })
    }

    pub fn show_welcome(&mut self) -> Result<(), ActuatorError> {
        self.draw(&[WELCOME_TITLE, WELCOME_SUBTITLE])
    }

    pub fn show_readings(
        &mut self,
        temperature: f32,
        humidity: f32,
        gas: f32,
    ) -> Result<(), ActuatorError> {
        let mut temp = Line::new();
        let mut hum = Line::new();
        let mut gas_line = Line::new();
        // Capacity covers every finite f32 at two decimals.
        let _ = write!(temp, "Temp: {:.2} C", temperature);
        let _ = write!(hum, "Humidity: {:.2} %", humidity);
        let _ = write!(gas_line, "Gas Level: {:.2} ppm", gas);
        self.draw(&[temp.as_str(), hum.as_str(), gas_line.as_str()])
    }

    pub fn show_alert(&mut self, message: &str) -> Result<(), ActuatorError> {
        self.draw(&[ALERT_BANNER, message])
    }

    pub fn layout(&self) -> LcdConfig {
        self.layout
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    fn draw(&mut self, lines: &[&str]) -> Result<(), ActuatorError> {
        self.driver.clear()?;
        for (row, line) in lines.iter().enumerate() {
            let Ok(row) = u8::try_from(row) else { break };
            if row >= self.layout.rows {
                break;
            }
            self.driver.set_cursor(0, row)?;
            self.driver
                .print(truncate(line, usize::from(self.layout.columns)))?;
        }
        Ok(())
    }
}

/// Cut `s` to at most `cols` characters.
fn truncate(s: &str, cols: usize) -> &str {
    match s.char_indices().nth(cols) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
