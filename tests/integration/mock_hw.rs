//! Mock drivers for integration tests.
//!
//! Pins and delays share one [`EventLog`] so tests can assert on the exact
//! order of level changes and blocking waits.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use smartbuilding::error::{CloudError, SensorError};
use smartbuilding::ports::{AnalogInput, DatabaseClient, HygrometerDriver, ProbeBus};

// ── Shared event log ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HwEvent {
    High(&'static str),
    Low(&'static str),
    DelayMs(u32),
}

pub type EventLog = Rc<RefCell<Vec<HwEvent>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

// ── MockPin ───────────────────────────────────────────────────

pub struct MockPin {
    name: &'static str,
    high: Rc<Cell<bool>>,
    log: EventLog,
}

#[allow(dead_code)]
impl MockPin {
    pub fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            name,
            high: Rc::new(Cell::new(false)),
            log: Rc::clone(log),
        }
    }

    /// A handle that observes the level after the pin has been moved.
    pub fn level(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.high)
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        self.log.borrow_mut().push(HwEvent::Low(self.name));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        self.log.borrow_mut().push(HwEvent::High(self.name));
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

/// An output whose every write fails.
pub struct BrokenPin;

#[derive(Debug)]
pub struct BrokenPinError;

impl embedded_hal::digital::Error for BrokenPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = BrokenPinError;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(BrokenPinError)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(BrokenPinError)
    }
}

// ── MockDelay ─────────────────────────────────────────────────

pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: Rc::clone(log) }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(HwEvent::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(HwEvent::DelayMs(ms));
    }
}

// ── MockAdc ───────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAdc {
    pub raw: Rc<Cell<u16>>,
    pub configured: Rc<Cell<bool>>,
}

impl MockAdc {
    pub fn new(raw: u16) -> Self {
        let adc = Self::default();
        adc.raw.set(raw);
        adc
    }
}

impl AnalogInput for MockAdc {
    fn configure(&mut self) {
        self.configured.set(true);
    }

    fn read_raw(&mut self) -> u16 {
        self.raw.get()
    }
}

// ── MockHygrometer ────────────────────────────────────────────

pub struct MockHygrometer {
    pub temperature: Result<f32, SensorError>,
    pub humidity: Result<f32, SensorError>,
    pub begun: bool,
    pub reads: u32,
}

impl MockHygrometer {
    pub fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature: Ok(temperature),
            humidity: Ok(humidity),
            begun: false,
            reads: 0,
        }
    }
}

impl HygrometerDriver for MockHygrometer {
    fn begin(&mut self) -> Result<(), SensorError> {
        self.begun = true;
        Ok(())
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.reads += 1;
        self.temperature
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        self.reads += 1;
        self.humidity
    }
}

// ── MockProbeBus ──────────────────────────────────────────────

pub struct MockProbeBus {
    pub temperatures: Vec<f32>,
    pub conversion_fails: bool,
    pub conversions: u32,
}

impl MockProbeBus {
    pub fn new(temperatures: &[f32]) -> Self {
        Self {
            temperatures: temperatures.to_vec(),
            conversion_fails: false,
            conversions: 0,
        }
    }
}

impl ProbeBus for MockProbeBus {
    fn begin(&mut self) -> Result<usize, SensorError> {
        Ok(self.temperatures.len())
    }

    fn request_temperatures(&mut self) -> Result<(), SensorError> {
        self.conversions += 1;
        if self.conversion_fails {
            Err(SensorError::Timeout)
        } else {
            Ok(())
        }
    }

    fn temperature_c(&mut self, index: usize) -> Result<f32, SensorError> {
        self.temperatures
            .get(index)
            .copied()
            .ok_or(SensorError::NoDevice)
    }
}

// ── MockDatabase ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DbCall {
    Begin { host: String, auth: String },
    AutoReconnect(bool),
    Set { path: String, value: String },
    Get { path: String },
}

#[derive(Default)]
pub struct MockDatabase {
    pub calls: Vec<DbCall>,
    pub store: HashMap<String, serde_json::Value>,
    pub fail_with: Option<CloudError>,
}

#[allow(dead_code)]
impl MockDatabase {
    pub fn writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DbCall::Set { .. }))
            .count()
    }
}

impl DatabaseClient for MockDatabase {
    fn begin(&mut self, host: &str, auth: &str) -> Result<(), CloudError> {
        self.calls.push(DbCall::Begin {
            host: host.to_owned(),
            auth: auth.to_owned(),
        });
        self.fail_with.map_or(Ok(()), Err)
    }

    fn set_auto_reconnect(&mut self, enabled: bool) {
        self.calls.push(DbCall::AutoReconnect(enabled));
    }

    fn set_string(&mut self, path: &str, value: &str) -> Result<(), CloudError> {
        self.calls.push(DbCall::Set {
            path: path.to_owned(),
            value: value.to_owned(),
        });
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.store
            .insert(path.to_owned(), serde_json::Value::String(value.to_owned()));
        Ok(())
    }

    fn get(&mut self, path: &str) -> Result<serde_json::Value, CloudError> {
        self.calls.push(DbCall::Get {
            path: path.to_owned(),
        });
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        Ok(self.store.get(path).cloned().unwrap_or(serde_json::Value::Null))
    }
}
