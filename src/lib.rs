//! # edsig
//!
//! Ed25519 (RFC 8032) signing and verification for authenticating router
//! protocol messages.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edsig = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): the Ed25519 signer and verifier
//! - `rand` (default): random seed generation through a caller-supplied RNG
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edsig-api`]: Error type, wire lengths, signer/verifier traits
//! - [`edsig-common`]: Secret buffers zeroed on drop
//! - [`edsig-internal`]: Constant-time and byte-order helpers
//! - [`edsig-sign`]: Ed25519 itself
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "sign")]
//! # fn main() -> edsig::api::Result<()> {
//! use edsig::prelude::*;
//!
//! let signer = Signer::from_seed(&[1u8; 32])?;
//! let signature = signer.sign(b"route update");
//!
//! let verifier = Verifier::from_bytes(signer.public_key().as_bytes())?;
//! assert!(verifier.verify(b"route update", signature.as_ref()));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sign"))]
//! # fn main() {}
//! ```

// Core re-exports (always available)
pub use edsig_api as api;
pub use edsig_common as common;
pub use edsig_internal as internal;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use edsig_sign as sign;

#[cfg(feature = "rand")]
pub use rand;

/// Common imports for edsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{MessageSigner, MessageVerifier, SignatureScheme};

    // Re-export security types
    pub use crate::common::SecretBuffer;

    #[cfg(feature = "sign")]
    pub use crate::sign::{Ed25519, PublicKey, Signature, Signer, Verifier, VerifyMode};

    #[cfg(all(feature = "sign", feature = "rand"))]
    pub use crate::sign::generate_keypair;
}
