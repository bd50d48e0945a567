//! Public API traits and types for the edsig library
//!
//! This crate provides the public API surface shared by the signer and
//! verifier: the error type, the fixed wire lengths, and the traits a
//! message-authentication layer programs against.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{MessageSigner, MessageVerifier, SignatureScheme};
