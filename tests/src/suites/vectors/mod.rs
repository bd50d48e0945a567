//! Known-answer vectors for Ed25519
//!
//! Vectors live in `src/vectors/*.json`. Each group fixes a verification
//! mode; each case carries a public key, message, signature and the
//! expected verdict, plus an optional seed whose derived key and
//! signature must match exactly.

pub mod error;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::{EngineError, Result};
pub use loader::{load_ed25519, load_suite};
pub use model::{TestCase, TestGroup, TestSuite};
pub use runner::{run_case, run_suite, SuiteReport};
