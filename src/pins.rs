//! Default GPIO / ADC assignments for the monitoring node (ESP32 DevKitC).
//!
//! These only seed [`PinConfig::default()`](crate::config::PinConfig);
//! drivers receive their pins through the config, never from here.
//!
//! Analog sensors sit on ADC1 because ADC2 is unusable while Wi-Fi is up.

// ---------------------------------------------------------------------------
// Sensors: analog (ADC1)
// ---------------------------------------------------------------------------

/// Flame sensor analog output. ADC1 channel 0 (GPIO 36 / VP).
pub const FLAME_ADC_CHANNEL: u32 = 0;
/// MQ-2 combustible gas sensor. ADC1 channel 3 (GPIO 39 / VN).
pub const GAS_ADC_CHANNEL: u32 = 3;
/// MQ-135 air-quality sensor. ADC1 channel 6 (GPIO 34).
pub const AIR_QUALITY_ADC_CHANNEL: u32 = 6;

/// Highest ADC1 channel number on the ESP32.
pub const ADC1_MAX_CHANNEL: u32 = 7;
/// 12-bit ADC full-scale value.
pub const ADC_MAX_RAW: u16 = 4095;

// ---------------------------------------------------------------------------
// Sensors: digital (single-wire)
// ---------------------------------------------------------------------------

/// DHT11 data line (open-drain, external 10 kΩ pull-up).
pub const DHT_GPIO: i32 = 4;
/// DS18B20 1-Wire bus (open-drain, external 4.7 kΩ pull-up).
pub const PROBE_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

pub const LED_GREEN_GPIO: i32 = 25;
pub const LED_RED_GPIO: i32 = 26;
/// Active buzzer, driven HIGH to sound.
pub const BUZZER_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// I²C bus (LCD backpack)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 21;
pub const I2C_SCL_GPIO: i32 = 22;
/// PCF8574 backpack default address.
pub const LCD_I2C_ADDRESS: u8 = 0x27;
pub const LCD_COLUMNS: u8 = 20;
pub const LCD_ROWS: u8 = 4;

/// Highest usable GPIO number on the ESP32.
pub const MAX_GPIO: i32 = 39;
