//! Fuzz target: `cloud::normalize_path`
//!
//! Invariants checked:
//! - No panics under any string
//! - An accepted path is non-empty, has no leading or trailing `/`, no
//!   empty segment and none of `.`, `$`, `#`, `[`, `]`
//!
//! cargo fuzz run fuzz_cloud_path

#![no_main]

use libfuzzer_sys::fuzz_target;
use smartbuilding::cloud::normalize_path;

fuzz_target!(|path: &str| {
    if let Ok(p) = normalize_path(path) {
        assert!(!p.is_empty());
        assert!(!p.starts_with('/') && !p.ends_with('/'));
        assert!(p.split('/').all(|seg| !seg.is_empty()));
        assert!(!p.contains(['.', '$', '#', '[', ']']));
    }
});
