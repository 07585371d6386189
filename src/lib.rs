//! Smart building monitoring firmware library.
//!
//! Sensor wrappers, actuator drivers and the cloud sync module, exposed for
//! integration testing. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module; the host build swaps
//! in simulation backends.

#![deny(unused_must_use)]

pub mod adapters;
pub mod cloud;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod ports;
pub mod sensors;
