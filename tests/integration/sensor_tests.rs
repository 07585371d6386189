//! Sensor wrappers against mock drivers and the simulated ADC.

use smartbuilding::config::ThresholdConfig;
use smartbuilding::drivers::hw_init::{sim_set_adc, AdcChannel};
use smartbuilding::error::SensorError;
use smartbuilding::pins;
use smartbuilding::sensors::climate::ClimateSensor;
use smartbuilding::sensors::flame::FlameSensor;
use smartbuilding::sensors::gas::{Mq135, Mq2};
use smartbuilding::sensors::probe::TemperatureProbe;
use smartbuilding::sensors::{SensorSnapshot, ALERT_AIR, ALERT_FIRE, ALERT_GAS};

use crate::mock_hw::{MockAdc, MockHygrometer, MockProbeBus};

// ── Threshold sensors ─────────────────────────────────────────

#[test]
fn flame_on_simulated_adc_trips_strictly_above_300() {
    let thresholds = ThresholdConfig::default();
    let mut flame = FlameSensor::new(
        AdcChannel::new(pins::FLAME_ADC_CHANNEL),
        thresholds.flame_raw,
    );
    flame.initialize();
    assert_eq!(flame.threshold(), 300);

    sim_set_adc(pins::FLAME_ADC_CHANNEL, 300);
    assert!(!flame.is_flame_detected());

    sim_set_adc(pins::FLAME_ADC_CHANNEL, 301);
    assert!(flame.is_flame_detected());
    assert_eq!(flame.read_raw(), 301);
}

#[test]
fn unpowered_flame_sensor_reads_no_flame() {
    let mut flame = FlameSensor::new(MockAdc::new(0), 300);
    assert!(!flame.is_flame_detected());
}

#[test]
fn initialize_configures_the_channel() {
    let adc = MockAdc::new(0);
    let configured = adc.configured.clone();
    let mut mq2 = Mq2::new(adc, 1.0);
    assert!(!configured.get());
    mq2.initialize();
    assert!(configured.get());
}

#[test]
fn gas_level_scales_raw_sample() {
    let mut mq2 = Mq2::new(MockAdc::new(200), 1.5);
    assert_eq!(mq2.read_gas_concentration(), 300.0);
    assert!(!mq2.is_gas_detected(300.0));
    assert!(mq2.is_gas_detected(299.5));
}

#[test]
fn air_quality_tracks_live_samples() {
    let adc = MockAdc::new(100);
    let raw = adc.raw.clone();
    let mut mq135 = Mq135::new(adc, 1.0);
    assert!(!mq135.is_gas_detected(400.0));
    raw.set(401);
    assert!(mq135.is_gas_detected(400.0));
    assert_eq!(mq135.calibration_factor(), 1.0);
}

// ── DHT11 wrapper ─────────────────────────────────────────────

#[test]
fn climate_is_invalid_before_first_read() {
    let sensor = ClimateSensor::new(MockHygrometer::new(21.0, 40.0));
    assert!(!sensor.is_valid());
    assert_eq!(sensor.last(), None);
}

#[test]
fn climate_reads_pass_through() {
    let mut sensor = ClimateSensor::new(MockHygrometer::new(23.0, 55.0));
    sensor.initialize().unwrap();
    assert_eq!(sensor.read_temperature(), 23.0);
    assert_eq!(sensor.read_humidity(), 55.0);
    assert!(sensor.is_valid());
}

#[test]
fn humidity_failure_invalidates_reading() {
    let mut dht = MockHygrometer::new(23.0, 55.0);
    dht.humidity = Err(SensorError::ChecksumMismatch);
    let mut sensor = ClimateSensor::new(dht);

    assert_eq!(sensor.read_temperature(), 23.0);
    assert!(sensor.read_humidity().is_nan());
    assert!(!sensor.is_valid());
    assert_eq!(sensor.sample(), Err(SensorError::InvalidReading));
}

#[test]
fn is_valid_does_not_resample() {
    let mut sensor = ClimateSensor::new(MockHygrometer::new(20.0, 30.0));
    let reading = sensor.sample().unwrap();
    assert_eq!(reading.temperature_c, 20.0);
    assert_eq!(reading.humidity_pct, 30.0);

    assert!(sensor.is_valid());
    assert!(sensor.is_valid());
    assert_eq!(sensor.last(), Some(reading));
}

// ── DS18B20 wrapper ───────────────────────────────────────────

#[test]
fn probe_reports_first_device() {
    let mut probe = TemperatureProbe::new(MockProbeBus::new(&[18.5, 30.0]));
    assert_eq!(probe.device_count(), 0);
    assert_eq!(probe.initialize(), Ok(2));
    assert_eq!(probe.device_count(), 2);
    assert_eq!(probe.read_temperature(), 18.5);
    assert_eq!(probe.read_index(1), Ok(30.0));
    assert!(probe.is_valid());
}

#[test]
fn empty_bus_reads_nan() {
    let mut probe = TemperatureProbe::new(MockProbeBus::new(&[]));
    assert_eq!(probe.initialize(), Ok(0));
    assert!(probe.read_temperature().is_nan());
    assert_eq!(probe.read_index(0), Err(SensorError::NoDevice));
    assert!(!probe.is_valid());
}

#[test]
fn failed_conversion_reads_nan() {
    let mut bus = MockProbeBus::new(&[22.0]);
    bus.conversion_fails = true;
    let mut probe = TemperatureProbe::new(bus);
    probe.initialize().unwrap();
    assert!(probe.read_temperature().is_nan());
    assert_eq!(probe.read_index(0), Err(SensorError::Timeout));
}

// ── Snapshot alerting ─────────────────────────────────────────

#[test]
fn alert_priority_is_fire_then_gas_then_air() {
    let thresholds = ThresholdConfig::default();
    let mut snap = SensorSnapshot {
        gas_level: thresholds.gas_level + 1.0,
        air_quality: thresholds.air_quality_level + 1.0,
        flame_detected: true,
        ..SensorSnapshot::default()
    };
    assert_eq!(snap.alert_reason(&thresholds), Some(ALERT_FIRE));
    snap.flame_detected = false;
    assert_eq!(snap.alert_reason(&thresholds), Some(ALERT_GAS));
    snap.gas_level = 0.0;
    assert_eq!(snap.alert_reason(&thresholds), Some(ALERT_AIR));
    snap.air_quality = 0.0;
    assert_eq!(snap.alert_reason(&thresholds), None);
}
