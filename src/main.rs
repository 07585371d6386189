//! Smart Building Monitor firmware entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Adapters                                                    │
//! │  AdcChannel ×3   Dht11Driver   OneWireProbeBus               │
//! │  GpioOutput ×3   Hd44780Display   FirebaseAdapter            │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ───────────────         │
//! │                                                              │
//! │  FlameSensor  Mq2  Mq135  ClimateSensor  TemperatureProbe    │
//! │  StatusLeds   Buzzer   LcdDisplay   CloudSync                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded polling loop: read every sensor, pick an alert,
//! drive the LEDs, LCD and buzzer, and push a snapshot to the cloud every
//! `publish_interval_secs`.
#![deny(unused_must_use)]

use anyhow::{anyhow, Result};
use log::{info, warn};

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::delay::{Ets, FreeRtos};
use esp_idf_svc::hal::gpio::{AnyIOPin, PinDriver, Pull};
use esp_idf_svc::hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_svc::hal::modem::Modem;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi};

use smartbuilding::adapters::dht::Dht11Driver;
use smartbuilding::adapters::ds18b20::OneWireProbeBus;
use smartbuilding::adapters::firebase::FirebaseAdapter;
use smartbuilding::adapters::lcd::Hd44780Display;
use smartbuilding::cloud::CloudSync;
use smartbuilding::config::SystemConfig;
use smartbuilding::drivers::buzzer::Buzzer;
use smartbuilding::drivers::hw_init::{self, AdcChannel, GpioOutput};
use smartbuilding::drivers::lcd::LcdDisplay;
use smartbuilding::error::Error;
use smartbuilding::drivers::led::StatusLeds;
use smartbuilding::sensors::climate::ClimateSensor;
use smartbuilding::sensors::flame::FlameSensor;
use smartbuilding::sensors::gas::{Mq135, Mq2};
use smartbuilding::sensors::probe::TemperatureProbe;
use smartbuilding::sensors::SensorSnapshot;

const WIFI_SSID: &str = match option_env!("WIFI_SSID") {
    Some(s) => s,
    None => "",
};
const WIFI_PASS: &str = match option_env!("WIFI_PASS") {
    Some(s) => s,
    None => "",
};

/// Number of fields in a published snapshot.
const SNAPSHOT_FIELDS: usize = 6;

fn load_config() -> Result<SystemConfig> {
    let config = match option_env!("SMARTBUILDING_CONFIG_JSON") {
        Some(json) => SystemConfig::from_json(json)?,
        None => SystemConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn connect_wifi(
    modem: Modem,
    sysloop: EspSystemEventLoop,
    nvs: EspDefaultNvsPartition,
) -> Result<BlockingWifi<EspWifi<'static>>> {
    let mut wifi = BlockingWifi::wrap(EspWifi::new(modem, sysloop.clone(), Some(nvs))?, sysloop)?;
    wifi.set_configuration(&Configuration::Client(ClientConfiguration {
        ssid: WIFI_SSID.try_into().map_err(|_| anyhow!("WIFI_SSID too long"))?,
        password: WIFI_PASS.try_into().map_err(|_| anyhow!("WIFI_PASS too long"))?,
        ..Default::default()
    }))?;
    wifi.start()?;
    wifi.connect()?;
    wifi.wait_netif_up()?;
    info!("Wi-Fi: connected to '{}'", WIFI_SSID);
    Ok(wifi)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Smart Building Monitor v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    let pins = &config.pins;

    // ── 2. Raw peripherals (ADC1, push-pull outputs) ──────────
    hw_init::init_peripherals(pins).map_err(Error::from)?;

    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    // ── 3. Sensors ────────────────────────────────────────────
    let mut flame = FlameSensor::new(
        AdcChannel::new(pins.flame_adc_channel),
        config.thresholds.flame_raw,
    );
    let mut mq2 = Mq2::new(AdcChannel::new(pins.gas_adc_channel), config.thresholds.gas_factor);
    let mut mq135 = Mq135::new(
        AdcChannel::new(pins.air_quality_adc_channel),
        config.thresholds.air_quality_factor,
    );
    flame.initialize();
    mq2.initialize();
    mq135.initialize();

    // SAFETY: pin numbers were validated against the ESP32 GPIO range and
    // are not claimed by any other driver.
    let mut dht_pin = PinDriver::input_output_od(unsafe { AnyIOPin::new(pins.dht_gpio) })?;
    dht_pin.set_pull(Pull::Up)?;
    let mut climate = ClimateSensor::new(Dht11Driver::new(dht_pin, Ets));
    if let Err(e) = climate.initialize() {
        warn!("DHT11 init failed: {}", e);
    }

    // SAFETY: as above.
    let probe_pin = PinDriver::input_output_od(unsafe { AnyIOPin::new(pins.probe_gpio) })?;
    let mut probe = TemperatureProbe::new(
        OneWireProbeBus::new(probe_pin, Ets).map_err(|e| anyhow!("1-Wire bus: {}", e))?,
    );
    if let Err(e) = probe.initialize() {
        warn!("DS18B20 init failed: {}", e);
    }

    // ── 4. Actuators ──────────────────────────────────────────
    let mut leds = StatusLeds::new(
        GpioOutput::new(pins.led_green_gpio),
        GpioOutput::new(pins.led_red_gpio),
    );
    leds.initialize()?;
    let mut buzzer = Buzzer::new(GpioOutput::new(pins.buzzer_gpio), FreeRtos);
    buzzer.initialize()?;

    // SAFETY: as above.
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        unsafe { AnyIOPin::new(pins.i2c_sda_gpio) },
        unsafe { AnyIOPin::new(pins.i2c_scl_gpio) },
        &I2cConfig::new().baudrate(Hertz(100_000)),
    )?;
    let mut lcd = LcdDisplay::new(
        Hd44780Display::new(i2c, Ets, config.lcd.i2c_address, config.lcd.columns),
        config.lcd,
    )?;
    lcd.show_welcome()?;

    // ── 5. Network + cloud ────────────────────────────────────
    let _wifi = connect_wifi(peripherals.modem, sysloop, nvs)?;
    let mut cloud = CloudSync::new(FirebaseAdapter::new());
    if !cloud.initialize(&config.cloud) {
        warn!("Cloud sync disabled: {}", cloud.error_reason());
    }

    info!("System ready. Entering polling loop.");

    // ── 6. Polling loop ───────────────────────────────────────
    let poll_ms = config.timing.sensor_poll_interval_ms;
    let publish_every = (config.timing.publish_interval_secs * 1000 / poll_ms).max(1);
    let mut ticks: u32 = 0;

    loop {
        let snapshot = SensorSnapshot {
            temperature: climate.read_temperature(),
            humidity: climate.read_humidity(),
            probe_temperature: probe.read_temperature(),
            gas_level: mq2.read_gas_concentration(),
            air_quality: mq135.read_air_quality(),
            flame_detected: flame.is_flame_detected(),
        };
        if !climate.is_valid() {
            warn!("DHT11 reading invalid");
        }

        let shown = match snapshot.alert_reason(&config.thresholds) {
            Some(reason) => {
                warn!("ALERT: {}", reason);
                leds.set_red()
                    .and_then(|()| lcd.show_alert(reason))
                    .and_then(|()| buzzer.alert(config.timing.alert_duration_ms))
            }
            None => leds.set_green().and_then(|()| {
                lcd.show_readings(snapshot.temperature, snapshot.humidity, snapshot.gas_level)
            }),
        };
        if let Err(e) = shown {
            warn!("Actuator update failed: {}", e);
        }

        ticks = ticks.wrapping_add(1);
        if ticks % publish_every == 0 && cloud.is_initialized() {
            let sent = cloud.publish_snapshot(&config.cloud.root, &snapshot);
            if sent < SNAPSHOT_FIELDS {
                warn!(
                    "Cloud publish: {}/{} fields sent ({})",
                    sent,
                    SNAPSHOT_FIELDS,
                    cloud.error_reason()
                );
            }
        }

        FreeRtos::delay_ms(poll_ms);
    }
}
