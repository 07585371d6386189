//! Fuzz target: `SystemConfig::from_json`
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - Any config that parses also passes `validate()`
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use smartbuilding::config::SystemConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = SystemConfig::from_json(text) {
        assert!(cfg.validate().is_ok());
    }
});
