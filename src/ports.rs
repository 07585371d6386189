//! Port traits: the boundary between the component wrappers and the
//! drivers underneath them.
//!
//! ```text
//!   Driver adapter ──▶ Port trait ──▶ Sensor / actuator / cloud wrapper
//! ```
//!
//! Digital outputs and delays use the `embedded-hal` 1.0 traits directly.
//! Everything `embedded-hal` has no trait for (ADC samples, the DHT and
//! DS18B20 libraries, the character LCD, the cloud database client) gets a
//! port here. Adapters implement them for ESP-IDF hardware and for
//! host-side simulation; tests implement them with mocks.

use crate::error::{ActuatorError, CloudError, SensorError};

// ───────────────────────────────────────────────────────────────
// Analog input
// ───────────────────────────────────────────────────────────────

/// One ADC channel.
///
/// Reads cannot fail: an unpowered or miswired sensor simply returns a
/// stable low value.
pub trait AnalogInput {
    /// Configure the channel. Called once at startup.
    fn configure(&mut self) {}

    /// Take one raw sample.
    fn read_raw(&mut self) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn configure(&mut self) {
        (**self).configure();
    }

    fn read_raw(&mut self) -> u16 {
        (**self).read_raw()
    }
}

// ───────────────────────────────────────────────────────────────
// Humidity / temperature driver (DHT family)
// ───────────────────────────────────────────────────────────────

pub trait HygrometerDriver {
    /// Bring the sensor out of reset.
    fn begin(&mut self) -> Result<(), SensorError>;

    /// Temperature in °C.
    fn read_temperature(&mut self) -> Result<f32, SensorError>;

    /// Relative humidity in %.
    fn read_humidity(&mut self) -> Result<f32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Temperature probe bus (DS18B20 on 1-Wire)
// ───────────────────────────────────────────────────────────────

pub trait ProbeBus {
    /// Enumerate the bus. Returns the number of probes found.
    fn begin(&mut self) -> Result<usize, SensorError>;

    /// Start a conversion on every probe and wait for it to complete.
    fn request_temperatures(&mut self) -> Result<(), SensorError>;

    /// Last converted temperature of the probe at `index`, in °C.
    fn temperature_c(&mut self, index: usize) -> Result<f32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Character display (HD44780 behind an I²C backpack)
// ───────────────────────────────────────────────────────────────

pub trait CharacterDisplay {
    /// Initialise the controller.
    fn init(&mut self) -> Result<(), ActuatorError>;

    /// Switch the backlight.
    fn set_backlight(&mut self, on: bool) -> Result<(), ActuatorError>;

    /// Clear every cell and home the cursor.
    fn clear(&mut self) -> Result<(), ActuatorError>;

    /// Move the cursor to `(col, row)`, both zero-based.
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), ActuatorError>;

    /// Write text at the cursor.
    fn print(&mut self, text: &str) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Cloud database client
// ───────────────────────────────────────────────────────────────

/// Hierarchical key → JSON value store (Firebase Realtime Database).
///
/// Paths passed in are already validated and carry no leading `/`.
pub trait DatabaseClient {
    /// Open a session against `host` using `auth`.
    fn begin(&mut self, host: &str, auth: &str) -> Result<(), CloudError>;

    /// Ask the network layer to reconnect on its own after a drop.
    fn set_auto_reconnect(&mut self, enabled: bool);

    /// Store a string value at `path`.
    fn set_string(&mut self, path: &str, value: &str) -> Result<(), CloudError>;

    /// Fetch whatever is stored at `path`.
    fn get(&mut self, path: &str) -> Result<serde_json::Value, CloudError>;
}
