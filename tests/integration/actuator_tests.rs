//! LED pair, buzzer and LCD screens against recording mocks.

use smartbuilding::adapters::lcd::MemoryDisplay;
use smartbuilding::config::LcdConfig;
use smartbuilding::drivers::buzzer::Buzzer;
use smartbuilding::drivers::lcd::LcdDisplay;
use smartbuilding::drivers::led::{LedState, StatusLeds};
use smartbuilding::error::ActuatorError;

use crate::mock_hw::{event_log, BrokenPin, HwEvent, MockDelay, MockPin};

fn leds() -> (StatusLeds<MockPin, MockPin>, crate::mock_hw::EventLog) {
    let log = event_log();
    let leds = StatusLeds::new(MockPin::new("green", &log), MockPin::new("red", &log));
    (leds, log)
}

// ── LED pair ──────────────────────────────────────────────────

#[test]
fn green_lowers_red_before_raising_green() {
    let (mut leds, log) = leds();
    leds.set_green().unwrap();
    assert_eq!(
        *log.borrow(),
        vec![HwEvent::Low("red"), HwEvent::High("green")]
    );
    assert_eq!(leds.state(), LedState::Green);
}

#[test]
fn red_then_clear_leaves_both_low() {
    let log = event_log();
    let green = MockPin::new("green", &log);
    let red = MockPin::new("red", &log);
    let (g, r) = (green.level(), red.level());
    let mut leds = StatusLeds::new(green, red);

    leds.set_red().unwrap();
    assert!(!g.get() && r.get());

    leds.clear().unwrap();
    assert!(!g.get() && !r.get());
    assert_eq!(leds.state(), LedState::Off);
}

#[test]
fn failed_write_keeps_previous_state() {
    let log = event_log();
    let mut leds = StatusLeds::new(MockPin::new("green", &log), BrokenPin);
    assert_eq!(leds.set_green(), Err(ActuatorError::GpioWriteFailed));
    assert_eq!(leds.state(), LedState::Off);
}

// ── Buzzer ────────────────────────────────────────────────────

#[test]
fn alert_holds_high_for_the_whole_delay() {
    let log = event_log();
    let mut buzzer = Buzzer::new(MockPin::new("buzzer", &log), MockDelay::new(&log));
    buzzer.initialize().unwrap();
    log.borrow_mut().clear();

    buzzer.alert(1000).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            HwEvent::High("buzzer"),
            HwEvent::DelayMs(1000),
            HwEvent::Low("buzzer"),
        ]
    );
    assert!(!buzzer.is_active());
}

#[test]
fn activate_and_deactivate_track_state() {
    let log = event_log();
    let pin = MockPin::new("buzzer", &log);
    let level = pin.level();
    let mut buzzer = Buzzer::new(pin, MockDelay::new(&log));

    buzzer.activate().unwrap();
    assert!(buzzer.is_active() && level.get());
    buzzer.deactivate().unwrap();
    assert!(!buzzer.is_active() && !level.get());
}

// ── LCD screens ───────────────────────────────────────────────

fn lcd(columns: u8, rows: u8) -> LcdDisplay<MemoryDisplay> {
    let layout = LcdConfig {
        i2c_address: 0x27,
        columns,
        rows,
    };
    LcdDisplay::new(MemoryDisplay::new(columns, rows), layout).unwrap()
}

#[test]
fn construction_turns_backlight_on() {
    let lcd = lcd(20, 4);
    assert_eq!((lcd.layout().columns, lcd.layout().rows), (20, 4));
    assert!(lcd.driver().is_ready());
    assert!(lcd.driver().backlight());
}

#[test]
fn welcome_screen() {
    let mut lcd = lcd(20, 4);
    lcd.show_welcome().unwrap();
    assert_eq!(lcd.driver().row_text(0), "Smart Building");
    assert_eq!(lcd.driver().row_text(1), "Monitoring Sys");
}

#[test]
fn readings_screen_on_20x4() {
    let mut lcd = lcd(20, 4);
    lcd.show_readings(24.5, 61.0, 123.456).unwrap();
    assert_eq!(lcd.driver().row_text(0), "Temp: 24.50 C");
    assert_eq!(lcd.driver().row_text(1), "Humidity: 61.00 %");
    assert_eq!(lcd.driver().row_text(2), "Gas Level: 123.46 pp");
    assert_eq!(lcd.driver().row_text(3), "");
}

#[test]
fn readings_on_16x2_are_truncated_and_third_line_dropped() {
    let mut lcd = lcd(16, 2);
    lcd.show_readings(24.5, 61.0, 123.0).unwrap();
    assert_eq!(lcd.driver().row_text(0), "Temp: 24.50 C");
    assert_eq!(lcd.driver().row_text(1), "Humidity: 61.00");
}

#[test]
fn alert_replaces_previous_screen() {
    let mut lcd = lcd(16, 2);
    lcd.show_readings(24.5, 61.0, 123.0).unwrap();
    lcd.show_alert("Gas leak").unwrap();
    assert_eq!(lcd.driver().row_text(0), "ALERT!");
    assert_eq!(lcd.driver().row_text(1), "Gas leak");
    // init + two screens
    assert_eq!(lcd.driver().clear_count(), 3);
}
