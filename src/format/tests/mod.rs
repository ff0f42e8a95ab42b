//! Format module tests
//!
//! Contains test suites for code generation:
//! - Engine tests (cartesian fold, zip, phases, host errors)
//! - Built-in target table tests

#[cfg(test)]
mod targets_tests;
