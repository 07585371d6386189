//! Sensor wrappers and the [`SensorSnapshot`] that bundles one poll.
//!
//! The wrappers never call each other; the polling loop in `main` reads
//! each one and assembles the snapshot.

pub mod climate;
pub mod flame;
pub mod gas;
pub mod probe;
pub mod threshold;

use serde::Serialize;

use crate::config::ThresholdConfig;

/// One poll of every sensor. NaN marks an invalid reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSnapshot {
    pub temperature: f32,
    pub humidity: f32,
    pub probe_temperature: f32,
    pub gas_level: f32,
    pub air_quality: f32,
    pub flame_detected: bool,
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self {
            temperature: f32::NAN,
            humidity: f32::NAN,
            probe_temperature: f32::NAN,
            gas_level: 0.0,
            air_quality: 0.0,
            flame_detected: false,
        }
    }
}

// Alert messages, sized for a 16-column panel.
pub const ALERT_FIRE: &str = "Fire detected";
pub const ALERT_GAS: &str = "Gas leak";
pub const ALERT_AIR: &str = "Poor air quality";

impl SensorSnapshot {
    /// Highest-priority alarm: flame, then gas, then air quality.
    pub fn alert_reason(&self, thresholds: &ThresholdConfig) -> Option<&'static str> {
        if self.flame_detected {
            Some(ALERT_FIRE)
        } else if self.gas_level > thresholds.gas_level {
            Some(ALERT_GAS)
        } else if self.air_quality > thresholds.air_quality_level {
            Some(ALERT_AIR)
        } else {
            None
        }
    }
}
