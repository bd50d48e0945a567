//! Trait definitions for signature users

pub mod signature;

pub use signature::{MessageSigner, MessageVerifier, SignatureScheme};
