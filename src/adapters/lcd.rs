//! Character display adapters.
//!
//! [`MemoryDisplay`] is a frame buffer that behaves like the panel (cursor,
//! clipping at the right edge, backlight flag) and backs host tests.
//! `Hd44780Display` drives a real HD44780 through a PCF8574 I²C backpack
//! with the `hd44780-driver` crate (ESP-IDF only).

use crate::error::ActuatorError;
use crate::ports::CharacterDisplay;

pub struct MemoryDisplay {
    columns: usize,
    rows: Vec<Vec<char>>,
    cursor: (usize, usize),
    backlight: bool,
    ready: bool,
    clears: u32,
}

impl MemoryDisplay {
    pub fn new(columns: u8, rows: u8) -> Self {
        let columns = usize::from(columns);
        Self {
            columns,
            rows: vec![vec![' '; columns]; usize::from(rows)],
            cursor: (0, 0),
            backlight: false,
            ready: false,
            clears: 0,
        }
    }

    /// Contents of `row` with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_owned())
            .unwrap_or_default()
    }

    pub fn backlight(&self) -> bool {
        self.backlight
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// How many times the panel has been cleared.
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    fn check_ready(&self) -> Result<(), ActuatorError> {
        if self.ready {
            Ok(())
        } else {
            Err(ActuatorError::DisplayNotReady)
        }
    }
}

impl CharacterDisplay for MemoryDisplay {
    fn init(&mut self) -> Result<(), ActuatorError> {
        self.ready = true;
        self.clear()
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.check_ready()?;
        self.backlight = on;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ActuatorError> {
        self.check_ready()?;
        for row in &mut self.rows {
            row.fill(' ');
        }
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), ActuatorError> {
        self.check_ready()?;
        let (col, row) = (usize::from(col), usize::from(row));
        if col >= self.columns || row >= self.rows.len() {
            return Err(ActuatorError::DisplayWriteFailed);
        }
        self.cursor = (col, row);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), ActuatorError> {
        self.check_ready()?;
        let (mut col, row) = self.cursor;
        let Some(cells) = self.rows.get_mut(row) else {
            return Err(ActuatorError::DisplayWriteFailed);
        };
        for ch in text.chars() {
            if col >= self.columns {
                break;
            }
            cells[col] = ch;
            col += 1;
        }
        self.cursor = (col, row);
        Ok(())
    }
}

// ── HD44780 over I²C (ESP-IDF) ────────────────────────────────

/// DDRAM address of the first cell of rows 0 and 1.
const ROW_BASE: [u8; 2] = [0x00, 0x40];

/// HD44780 DDRAM address of `(col, row)` on a panel `columns` wide.
///
/// Rows 2 and 3 of a four-line panel continue rows 0 and 1.
#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
fn ddram_address(columns: u8, col: u8, row: u8) -> u8 {
    let base = ROW_BASE[usize::from(row % 2)] + if row >= 2 { columns } else { 0 };
    base + col
}

#[cfg(target_os = "espidf")]
pub use hd44780::Hd44780Display;

#[cfg(target_os = "espidf")]
mod hd44780 {
    use embedded_hal_0_2::blocking::delay::{DelayMs, DelayUs};
    use embedded_hal_0_2::blocking::i2c::Write;
    use hd44780_driver::bus::I2CBus;
    use hd44780_driver::{Cursor, CursorBlink, Display, DisplayMode, HD44780};
    use log::debug;

    use crate::error::ActuatorError;
    use crate::ports::CharacterDisplay;

    pub struct Hd44780Display<I: Write, D> {
        bus: Option<I>,
        lcd: Option<HD44780<I2CBus<I>>>,
        delay: D,
        address: u8,
        columns: u8,
    }

    impl<I, D> Hd44780Display<I, D>
    where
        I: Write,
        D: DelayUs<u16> + DelayMs<u8>,
    {
        pub fn new(i2c: I, delay: D, address: u8, columns: u8) -> Self {
            Self {
                bus: Some(i2c),
                lcd: None,
                delay,
                address,
                columns,
            }
        }

    }

    impl<I, D> CharacterDisplay for Hd44780Display<I, D>
    where
        I: Write,
        D: DelayUs<u16> + DelayMs<u8>,
    {
        fn init(&mut self) -> Result<(), ActuatorError> {
            let Some(bus) = self.bus.take() else {
                return Ok(());
            };
            let mut lcd = HD44780::new_i2c(bus, self.address, &mut self.delay)
                .map_err(|_| ActuatorError::DisplayNotReady)?;
            lcd.reset(&mut self.delay)
                .map_err(|_| ActuatorError::DisplayWriteFailed)?;
            lcd.set_display_mode(
                DisplayMode {
                    display: Display::On,
                    cursor_visibility: Cursor::Invisible,
                    cursor_blink: CursorBlink::Off,
                },
                &mut self.delay,
            )
            .map_err(|_| ActuatorError::DisplayWriteFailed)?;
            self.lcd = Some(lcd);
            Ok(())
        }

        fn set_backlight(&mut self, on: bool) -> Result<(), ActuatorError> {
            // The backpack driver keeps P3 (backlight) asserted on every write.
            if self.lcd.is_none() {
                return Err(ActuatorError::DisplayNotReady);
            }
            if !on {
                debug!("lcd: backlight off not supported by the I2C bus driver");
            }
            Ok(())
        }

        fn clear(&mut self) -> Result<(), ActuatorError> {
            let lcd = self.lcd.as_mut().ok_or(ActuatorError::DisplayNotReady)?;
            lcd.clear(&mut self.delay)
                .map_err(|_| ActuatorError::DisplayWriteFailed)
        }

        fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), ActuatorError> {
            let position = super::ddram_address(self.columns, col, row);
            let lcd = self.lcd.as_mut().ok_or(ActuatorError::DisplayNotReady)?;
            lcd.set_cursor_pos(position, &mut self.delay)
                .map_err(|_| ActuatorError::DisplayWriteFailed)
        }

        fn print(&mut self, text: &str) -> Result<(), ActuatorError> {
            let lcd = self.lcd.as_mut().ok_or(ActuatorError::DisplayNotReady)?;
            lcd.write_str(text, &mut self.delay)
                .map_err(|_| ActuatorError::DisplayWriteFailed)
        }
    }
}
