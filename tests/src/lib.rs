//! Testing utilities for the edsig library
//!
//! Houses the JSON test-vector suite and its runner. The integration tests
//! under `tests/` drive it alongside property-based checks.

pub mod suites;
