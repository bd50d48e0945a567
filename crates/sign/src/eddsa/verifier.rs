//! Ed25519 verification (RFC 8032 §5.1.7)
//!
//! Every failure, from a short buffer to a forged signature, surfaces as a
//! plain `false`. The specific reason is only visible as a `trace` event.

use super::encoding::{decode_point, decode_scalar, encode_point};
use super::hash::sha512;
use super::point::EdwardsPoint;
use super::scalar::Scalar;
use super::types::PublicKey;
use core::fmt;
use edsig_api::{MessageVerifier, Result, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use thiserror::Error;
use tracing::{debug, trace};

/// Which verification equation to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerifyMode {
    /// `8·S·B == 8·R + 8·k·A`, insensitive to small-order components
    #[default]
    Cofactored,
    /// `S·B == R + k·A`, the exact equation
    Cofactorless,
}

/// Why a signature was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
enum Rejection {
    #[error("signature is {0} bytes")]
    SignatureLength(usize),

    #[error("S is not a canonical scalar")]
    NonCanonicalScalar,

    #[error("R is not a canonical point encoding")]
    InvalidCommitment,

    #[error("public key does not decode to a curve point")]
    InvalidPublicKey,

    #[error("verification equation does not hold")]
    EquationMismatch,
}

/// Ed25519 signature verifier bound to one public key
///
/// The key is decoded once here. A key that does not decode is not an
/// error: the verifier is still built and rejects every signature, which
/// [`has_valid_key`](Self::has_valid_key) reports up front.
#[derive(Clone)]
pub struct Verifier {
    public_key: PublicKey,
    point: Option<EdwardsPoint>,
    mode: VerifyMode,
}

impl Verifier {
    /// Build a verifier for `public_key`
    pub fn new(public_key: &PublicKey) -> Self {
        let point = match decode_point(public_key.as_bytes()) {
            Ok(point) => Some(point),
            Err(e) => {
                debug!(error = %e, "Ed25519 public key does not decode, all signatures will be rejected");
                None
            }
        };

        Verifier {
            public_key: *public_key,
            point,
            mode: VerifyMode::default(),
        }
    }

    /// Build a verifier from raw key bytes
    ///
    /// Only the length is checked here; see [`Verifier::new`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let public_key = PublicKey::from_bytes(bytes).map_err(|e| {
            debug!(actual = bytes.len(), "rejected Ed25519 public key of wrong length");
            e
        })?;
        Ok(Self::new(&public_key))
    }

    /// Select the verification equation
    pub fn with_mode(mut self, mode: VerifyMode) -> Self {
        self.mode = mode;
        self
    }

    /// The public key signatures are checked against, as supplied
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The verification equation in use
    pub fn mode(&self) -> VerifyMode {
        self.mode
    }

    /// Whether the public key decoded to a curve point
    pub fn has_valid_key(&self) -> bool {
        self.point.is_some()
    }

    /// Length of the public key in bytes (32)
    pub fn public_key_len(&self) -> usize {
        PUBLIC_KEY_LENGTH
    }

    /// Length of the signatures this verifier accepts (64)
    pub fn signature_len(&self) -> usize {
        SIGNATURE_LENGTH
    }

    /// Check `signature` over `message`
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match self.check(message, signature) {
            Ok(()) => true,
            Err(reason) => {
                trace!(%reason, "Ed25519 signature rejected");
                false
            }
        }
    }

    fn check(&self, message: &[u8], signature: &[u8]) -> core::result::Result<(), Rejection> {
        if signature.len() != SIGNATURE_LENGTH {
            return Err(Rejection::SignatureLength(signature.len()));
        }
        let (r_bytes, s_bytes) = signature.split_at(32);

        let s = decode_scalar(s_bytes).map_err(|_| Rejection::NonCanonicalScalar)?;
        let r = decode_point(r_bytes).map_err(|_| Rejection::InvalidCommitment)?;
        let a = self.point.as_ref().ok_or(Rejection::InvalidPublicKey)?;

        // k = H(R || A || M) mod L
        let challenge = sha512(&[r_bytes, &self.public_key.0[..], message]);
        let k = Scalar::from_bytes_mod_order_wide(&challenge);

        let lhs = EdwardsPoint::mul_base(&s);
        let rhs = r.add(&a.mul(&k));

        let (lhs, rhs) = match self.mode {
            VerifyMode::Cofactored => (lhs.mul_by_cofactor(), rhs.mul_by_cofactor()),
            VerifyMode::Cofactorless => (lhs, rhs),
        };

        // public values, plain byte comparison
        if encode_point(&lhs) == encode_point(&rhs) {
            Ok(())
        } else {
            Err(Rejection::EquationMismatch)
        }
    }
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("public_key", &self.public_key)
            .field("valid_key", &self.has_valid_key())
            .field("mode", &self.mode)
            .finish()
    }
}

impl MessageVerifier for Verifier {
    fn public_key_len(&self) -> usize {
        PUBLIC_KEY_LENGTH
    }

    fn signature_len(&self) -> usize {
        SIGNATURE_LENGTH
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        Verifier::verify(self, message, signature)
    }
}
