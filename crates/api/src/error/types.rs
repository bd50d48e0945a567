//! Error type definitions

use thiserror::Error;

/// Primary error type for key and signature construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Seed material was not exactly one seed long
    #[error("invalid seed length: expected {expected}, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    /// Public key material was not exactly one compressed point long
    #[error("invalid public key length: expected {expected}, got {actual}")]
    InvalidPublicKeyLength { expected: usize, actual: usize },

    /// Signature material was not exactly `R || S` long
    #[error("invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    /// The caller-supplied random source failed
    #[error("random generation failed in {context}: {message}")]
    Rng {
        context: &'static str,
        message: String,
    },
}

/// Result type for edsig operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build a length error for seed material
    pub fn seed_length(actual: usize) -> Self {
        Self::InvalidSeedLength {
            expected: crate::SEED_LENGTH,
            actual,
        }
    }

    /// Build a length error for public key material
    pub fn public_key_length(actual: usize) -> Self {
        Self::InvalidPublicKeyLength {
            expected: crate::PUBLIC_KEY_LENGTH,
            actual,
        }
    }

    /// Build a length error for signature material
    pub fn signature_length(actual: usize) -> Self {
        Self::InvalidSignatureLength {
            expected: crate::SIGNATURE_LENGTH,
            actual,
        }
    }
}
