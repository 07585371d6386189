//! System configuration parameters
//!
//! Every pin, threshold, display layout and cloud credential the firmware
//! uses. Components receive the relevant sub-struct at construction time;
//! nothing reads pin numbers or credentials from globals.
//!
//! Values can be injected as a JSON blob ([`SystemConfig::from_json`]);
//! missing fields fall back to [`Default`]. Cloud host and secret may also
//! be supplied at build time through `FIREBASE_HOST` / `FIREBASE_AUTH`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub pins: PinConfig,
    pub thresholds: ThresholdConfig,
    pub lcd: LcdConfig,
    pub cloud: CloudConfig,
    pub timing: TimingConfig,
}

/// Pin assignment for every sensor and actuator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinConfig {
    // --- Analog (ADC1 channels) ---
    pub flame_adc_channel: u32,
    pub gas_adc_channel: u32,
    pub air_quality_adc_channel: u32,

    // --- Single-wire sensors (GPIO) ---
    pub dht_gpio: i32,
    pub probe_gpio: i32,

    // --- Outputs (GPIO) ---
    pub led_green_gpio: i32,
    pub led_red_gpio: i32,
    pub buzzer_gpio: i32,

    // --- I²C ---
    pub i2c_sda_gpio: i32,
    pub i2c_scl_gpio: i32,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            flame_adc_channel: pins::FLAME_ADC_CHANNEL,
            gas_adc_channel: pins::GAS_ADC_CHANNEL,
            air_quality_adc_channel: pins::AIR_QUALITY_ADC_CHANNEL,
            dht_gpio: pins::DHT_GPIO,
            probe_gpio: pins::PROBE_GPIO,
            led_green_gpio: pins::LED_GREEN_GPIO,
            led_red_gpio: pins::LED_RED_GPIO,
            buzzer_gpio: pins::BUZZER_GPIO,
            i2c_sda_gpio: pins::I2C_SDA_GPIO,
            i2c_scl_gpio: pins::I2C_SCL_GPIO,
        }
    }
}

impl PinConfig {
    /// GPIOs that are driven as push-pull outputs.
    pub fn output_gpios(&self) -> [i32; 3] {
        [self.led_green_gpio, self.led_red_gpio, self.buzzer_gpio]
    }

    /// ADC1 channels sampled by the threshold sensors.
    pub fn adc_channels(&self) -> [u32; 3] {
        [
            self.flame_adc_channel,
            self.gas_adc_channel,
            self.air_quality_adc_channel,
        ]
    }
}

/// Detection thresholds and the linear factors applied to gas readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Raw ADC value above which a flame is reported.
    pub flame_raw: u16,
    /// MQ-2 level above which gas is reported.
    pub gas_level: f32,
    /// MQ-135 level above which poor air quality is reported.
    pub air_quality_level: f32,
    /// MQ-2 raw → level multiplier.
    pub gas_factor: f32,
    /// MQ-135 raw → level multiplier.
    pub air_quality_factor: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            flame_raw: 300,
            gas_level: 300.0,
            air_quality_level: 400.0,
            gas_factor: 1.0,
            air_quality_factor: 1.0,
        }
    }
}

/// Character LCD geometry and bus address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LcdConfig {
    pub i2c_address: u8,
    pub columns: u8,
    pub rows: u8,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            i2c_address: pins::LCD_I2C_ADDRESS,
            columns: pins::LCD_COLUMNS,
            rows: pins::LCD_ROWS,
        }
    }
}

/// Realtime Database connection parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Database host, without scheme (e.g. `project-default-rtdb.firebaseio.com`).
    pub host: heapless::String<96>,
    /// Legacy database secret or ID token appended as `?auth=`.
    pub auth: heapless::String<128>,
    /// Path under which sensor snapshots are published.
    pub root: heapless::String<32>,
}

const DEFAULT_FIREBASE_HOST: &str =
    "smart-building-monitoring-iot-default-rtdb.asia-southeast1.firebasedatabase.app";

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            host: bounded(option_env!("FIREBASE_HOST").unwrap_or(DEFAULT_FIREBASE_HOST)),
            auth: bounded(option_env!("FIREBASE_AUTH").unwrap_or("")),
            root: bounded("sensors"),
        }
    }
}

/// Copy `s` into a fixed-capacity string, truncating at capacity.
fn bounded<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Loop timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Sensor poll interval (milliseconds). DHT11 needs at least 1 s.
    pub sensor_poll_interval_ms: u32,
    /// Cloud publish interval (seconds).
    pub publish_interval_secs: u32,
    /// Buzzer alert length (milliseconds).
    pub alert_duration_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            sensor_poll_interval_ms: 2000,
            publish_interval_secs: 10,
            alert_duration_ms: 1000,
        }
    }
}

/// GPIOs 34–39 have no output driver on the ESP32.
const FIRST_INPUT_ONLY_GPIO: i32 = 34;

impl SystemConfig {
    /// Parse a JSON configuration blob and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON config"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Range-check every field. Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<()> {
        let p = &self.pins;
        if p.adc_channels().iter().any(|&ch| ch > pins::ADC1_MAX_CHANNEL) {
            return Err(Error::Config("ADC channel must be 0–7 (ADC1)"));
        }
        let gpios = [p.dht_gpio, p.probe_gpio, p.i2c_sda_gpio, p.i2c_scl_gpio];
        if gpios
            .iter()
            .chain(p.output_gpios().iter())
            .any(|g| !(0..=pins::MAX_GPIO).contains(g))
        {
            return Err(Error::Config("GPIO must be 0–39"));
        }
        let outputs = p.output_gpios();
        if outputs.iter().any(|&g| g >= FIRST_INPUT_ONLY_GPIO) {
            return Err(Error::Config("GPIO 34–39 are input-only"));
        }
        if outputs[0] == outputs[1] || outputs[0] == outputs[2] || outputs[1] == outputs[2] {
            return Err(Error::Config("LED and buzzer pins must be distinct"));
        }

        let t = &self.thresholds;
        if t.flame_raw > pins::ADC_MAX_RAW {
            return Err(Error::Config("flame_raw must be 0–4095"));
        }
        if !(t.gas_level.is_finite() && t.gas_level >= 0.0)
            || !(t.air_quality_level.is_finite() && t.air_quality_level >= 0.0)
        {
            return Err(Error::Config("gas thresholds must be finite and >= 0"));
        }
        if !(t.gas_factor.is_finite() && t.gas_factor > 0.0)
            || !(t.air_quality_factor.is_finite() && t.air_quality_factor > 0.0)
        {
            return Err(Error::Config("gas factors must be finite and > 0"));
        }

        let l = &self.lcd;
        if !(1..=40).contains(&l.columns) || !(1..=4).contains(&l.rows) {
            return Err(Error::Config("LCD must be 1–40 columns by 1–4 rows"));
        }
        if !(0x03..=0x77).contains(&l.i2c_address) {
            return Err(Error::Config("LCD I2C address must be 0x03–0x77"));
        }

        if self.cloud.host.is_empty() {
            return Err(Error::Config("cloud host must not be empty"));
        }
        if self.cloud.host.contains('/') {
            return Err(Error::Config("cloud host must not include a scheme or path"));
        }
        if crate::cloud::normalize_path(&self.cloud.root).is_err() {
            return Err(Error::Config("cloud root is not a valid database path"));
        }

        let tm = &self.timing;
        if tm.sensor_poll_interval_ms < 1000 {
            return Err(Error::Config("sensor_poll_interval_ms must be >= 1000"));
        }
        if !(1..=3600).contains(&tm.publish_interval_secs) {
            return Err(Error::Config("publish_interval_secs must be 1–3600"));
        }
        if tm.alert_duration_ms > 10_000 {
            return Err(Error::Config("alert_duration_ms must be <= 10000"));
        }
        Ok(())
    }
}
