//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements         | Connects to                        |
//! |------------|--------------------|------------------------------------|
//! | `firebase` | DatabaseClient     | Firebase REST / in-memory tree     |
//! | `lcd`      | CharacterDisplay   | HD44780 over I²C / frame buffer    |
//! | `dht`      | HygrometerDriver   | DHT11 (`dht-sensor`), ESP-IDF only |
//! | `ds18b20`  | ProbeBus           | DS18B20 on 1-Wire                  |
//!
//! ADC channels and GPIO outputs live in [`crate::drivers::hw_init`].

pub mod ds18b20;
pub mod firebase;
pub mod lcd;

#[cfg(target_os = "espidf")]
pub mod dht;
