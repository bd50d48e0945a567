//! Common implementations and shared functionality for the edsig library
//!
//! This crate holds the secret-handling types used by the signer.

#![cfg_attr(not(test), no_std)]

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
