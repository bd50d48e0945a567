//! Digital Signature Schemes
//!
//! This crate implements Ed25519 (RFC 8032): deterministic signing from a
//! 32-byte seed and strict, cofactored verification.

pub mod eddsa;

// Re-exports from the Ed25519 module
#[cfg(feature = "rand")]
pub use eddsa::generate_keypair;
pub use eddsa::{Ed25519, PublicKey, Signature, Signer, Verifier, VerifyMode};
