//! Cloud sync: string key/value access to the Realtime Database.
//!
//! Wraps a [`DatabaseClient`] with path validation, logging and a
//! "last error" slot. Each call stands alone: there is no batching, no
//! local buffering and no retry. A failed call is logged, remembered for
//! [`CloudSync::error_reason`], and reported to the caller as `false` /
//! `None`.

use log::{info, warn};

use crate::config::CloudConfig;
use crate::error::CloudError;
use crate::ports::DatabaseClient;
use crate::sensors::SensorSnapshot;

/// Realtime Database limits: bytes per key, levels per path.
const MAX_KEY_LEN: usize = 768;
const MAX_DEPTH: usize = 32;

pub struct CloudSync<C> {
    client: C,
    initialized: bool,
    last_error: Option<CloudError>,
}

impl<C: DatabaseClient> CloudSync<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            initialized: false,
            last_error: None,
        }
    }

    /// Open the database session and turn on network auto-reconnect.
    ///
    /// The network link must already be up.
    pub fn initialize(&mut self, config: &CloudConfig) -> bool {
        match self.client.begin(&config.host, &config.auth) {
            Ok(()) => {
                self.client.set_auto_reconnect(true);
                self.initialized = true;
                self.last_error = None;
                info!("cloud: session open ({})", config.host);
                true
            }
            Err(e) => {
                warn!("cloud: session failed: {}", e);
                self.initialized = false;
                self.last_error = Some(e);
                false
            }
        }
    }

    /// Write `value` at `path`. `false` on failure; see [`Self::error_reason`].
    pub fn set(&mut self, path: &str, value: &str) -> bool {
        match self.try_set(path, value) {
            Ok(()) => {
                info!("cloud: data sent successfully: {} = {}", path, value);
                true
            }
            Err(e) => {
                warn!("cloud: error sending {}: {}", path, e);
                false
            }
        }
    }

    /// Read the string stored at `path`. `None` on failure or when the
    /// stored value is not a string.
    pub fn get(&mut self, path: &str) -> Option<String> {
        match self.try_get(path) {
            Ok(value) => Some(value),
            Err(CloudError::TypeMismatch) => None,
            Err(e) => {
                warn!("cloud: error retrieving {}: {}", path, e);
                None
            }
        }
    }

    pub fn try_set(&mut self, path: &str, value: &str) -> Result<(), CloudError> {
        let result = self.checked_path(path).and_then(|p| self.client.set_string(p, value));
        self.record(result)
    }

    pub fn try_get(&mut self, path: &str) -> Result<String, CloudError> {
        let result = self
            .checked_path(path)
            .and_then(|p| self.client.get(p))
            .and_then(|v| match v {
                serde_json::Value::String(s) => Ok(s),
                serde_json::Value::Null => Err(CloudError::NotFound),
                _ => Err(CloudError::TypeMismatch),
            });
        self.record(result)
    }

    /// Write every snapshot field as a string under `root`.
    ///
    /// Returns how many writes succeeded.
    pub fn publish_snapshot(&mut self, root: &str, snapshot: &SensorSnapshot) -> usize {
        let root = match normalize_path(root) {
            Ok(root) => root,
            Err(e) => {
                warn!("cloud: cannot publish under {:?}: {}", root, e);
                self.last_error = Some(e);
                return 0;
            }
        };
        let fields = [
            ("temperature", format!("{:.2}", snapshot.temperature)),
            ("humidity", format!("{:.2}", snapshot.humidity)),
            ("probeTemperature", format!("{:.2}", snapshot.probe_temperature)),
            ("gasLevel", format!("{:.2}", snapshot.gas_level)),
            ("airQuality", format!("{:.2}", snapshot.air_quality)),
            ("flameDetected", snapshot.flame_detected.to_string()),
        ];
        let mut sent = 0;
        for (key, value) in &fields {
            if self.set(&format!("{root}/{key}"), value) {
                sent += 1;
            }
        }
        sent
    }

    /// Human-readable reason for the last failed call, empty after success.
    pub fn error_reason(&self) -> String {
        self.last_error.map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn last_error(&self) -> Option<CloudError> {
        self.last_error
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    fn checked_path<'p>(&self, path: &'p str) -> Result<&'p str, CloudError> {
        if !self.initialized {
            return Err(CloudError::NotInitialized);
        }
        normalize_path(path)
    }

    fn record<T>(&mut self, result: Result<T, CloudError>) -> Result<T, CloudError> {
        self.last_error = result.as_ref().err().copied();
        result
    }
}

/// Strip surrounding `/` and check Realtime Database key rules.
pub fn normalize_path(path: &str) -> Result<&str, CloudError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() || trimmed.split('/').count() > MAX_DEPTH {
        return Err(CloudError::InvalidPath);
    }
    let bad_segment = trimmed.split('/').any(|seg| {
        seg.is_empty()
            || seg.len() > MAX_KEY_LEN
            || seg
                .chars()
                .any(|c| matches!(c, '.' | '$' | '#' | '[' | ']') || c.is_control())
    });
    if bad_segment {
        return Err(CloudError::InvalidPath);
    }
    Ok(trimmed)
}
