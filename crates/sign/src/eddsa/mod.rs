//! EdDSA over Curve25519 (Ed25519, RFC 8032)
//!
//! This module provides deterministic Ed25519 signing and verification with
//! constant-time handling of every secret value.
//!
//! # Features
//!
//! - Curve arithmetic in fixed time: windowed scalar multiplication with
//!   full-table scans, branch-free field and scalar reduction
//! - Strict decoding: non-canonical points and scalars are rejected
//! - Cofactored verification by default, exact equation on request
//! - Secret key material zeroed on drop
//!
//! # Example
//!
//! ```
//! use edsig_sign::eddsa::Signer;
//!
//! # fn main() -> edsig_api::Result<()> {
//! let signer = Signer::from_seed(&[7u8; 32])?;
//!
//! let message = b"Hello, Ed25519!";
//! let signature = signer.sign(message);
//!
//! let verifier = signer.verifier();
//! assert!(verifier.verify(message, signature.as_ref()));
//! assert!(!verifier.verify(b"Hello, Ed448!", signature.as_ref()));
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Malformed points and scalars are not reported as errors. They fold into
//! `verify` returning `false`, and the decoding error type stays private:
//!
//! ```compile_fail
//! use edsig_sign::eddsa::DecodeError;
//! ```

mod constants;
mod encoding;
mod field;
mod hash;
mod point;
mod scalar;
mod signer;
mod types;
mod verifier;


#[cfg(feature = "rand")]
pub use signer::generate_keypair;
pub use signer::Signer;
pub use types::{PublicKey, Signature};
pub use verifier::{Verifier, VerifyMode};

use edsig_api::{SignatureScheme, PUBLIC_KEY_LENGTH, SEED_LENGTH, SIGNATURE_LENGTH};

/// Ed25519 marker carrying the scheme's fixed sizes
pub struct Ed25519;

impl SignatureScheme for Ed25519 {
    const NAME: &'static str = "Ed25519";
    const SEED_LEN: usize = SEED_LENGTH;
    const PUBLIC_KEY_LEN: usize = PUBLIC_KEY_LENGTH;
    const SIGNATURE_LEN: usize = SIGNATURE_LENGTH;
}
