//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises one group of components
//! against mock drivers. All tests run on the host with no real hardware
//! required.

mod actuator_tests;
mod mock_hw;
mod sensor_tests;
