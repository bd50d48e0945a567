//! Error handling for the edsig library
//!
//! Only construction-time problems surface as errors. A signature that
//! fails to verify is an expected outcome and is reported as `false`.

pub mod types;

pub use types::{Error, Result};
