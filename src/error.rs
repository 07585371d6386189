//! Unified error types for the smart building monitor.
//!
//! A single `Error` enum that every subsystem converts into, so the entry
//! point handles failures uniformly. All variants are `Copy`; a failure
//! reason can be stored (e.g. the last cloud error) without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor could not be read or returned an unusable value.
    Sensor(SensorError),
    /// An actuator or display command failed.
    Actuator(ActuatorError),
    /// The cloud database call failed.
    Cloud(CloudError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Cloud(e) => write!(f, "cloud: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The driver produced a "not-a-number" value.
    InvalidReading,
    /// The driver timed out waiting for the device.
    Timeout,
    /// The device answered with a bad checksum / CRC.
    ChecksumMismatch,
    /// No device answered on the bus.
    NoDevice,
    /// Pin or bus access failed underneath the driver.
    BusFault,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReading => write!(f, "reading is not a number"),
            Self::Timeout => write!(f, "device timed out"),
            Self::ChecksumMismatch => write!(f, "checksum mismatch"),
            Self::NoDevice => write!(f, "no device on bus"),
            Self::BusFault => write!(f, "bus access failed"),
        }
    }
}

impl core::error::Error for SensorError {}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// GPIO set failed.
    GpioWriteFailed,
    /// The display controller rejected a command.
    DisplayWriteFailed,
    /// The display has not been initialised.
    DisplayNotReady,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
            Self::DisplayWriteFailed => write!(f, "display write failed"),
            Self::DisplayNotReady => write!(f, "display not initialised"),
        }
    }
}

impl core::error::Error for ActuatorError {}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Cloud errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudError {
    /// `initialize()` has not been called (or failed).
    NotInitialized,
    /// The database path is empty or contains a forbidden character.
    InvalidPath,
    /// No response from the server (DNS, TCP, TLS or Wi-Fi failure).
    Network,
    /// The server answered with a non-success HTTP status.
    HttpStatus(u16),
    /// The payload could not be encoded or decoded.
    Serialization,
    /// The stored value has a different type than requested.
    TypeMismatch,
    /// Nothing is stored at the requested path.
    NotFound,
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "database session not initialised"),
            Self::InvalidPath => write!(f, "invalid database path"),
            Self::Network => write!(f, "connection lost"),
            Self::HttpStatus(401) => write!(f, "permission denied (HTTP 401)"),
            Self::HttpStatus(404) => write!(f, "not found (HTTP 404)"),
            Self::HttpStatus(code @ 500..) => write!(f, "server error (HTTP {code})"),
            Self::HttpStatus(code) => write!(f, "request rejected (HTTP {code})"),
            Self::Serialization => write!(f, "payload encoding failed"),
            Self::TypeMismatch => write!(f, "data type mismatch"),
            Self::NotFound => write!(f, "path not exist"),
        }
    }
}

impl core::error::Error for CloudError {}

impl From<CloudError> for Error {
    fn from(e: CloudError) -> Self {
        Self::Cloud(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
