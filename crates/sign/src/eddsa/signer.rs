//! Ed25519 signing (RFC 8032 §5.1.6)
//!
//! A [`Signer`] is built from a 32-byte seed. The seed is expanded once with
//! SHA-512 into a clamped secret scalar and a nonce prefix; neither leaves
//! this module and both are zeroed when the signer is dropped.

use super::encoding::{encode_point, encode_scalar};
use super::hash::sha512;
use super::point::EdwardsPoint;
use super::scalar::Scalar;
use super::types::{PublicKey, Signature};
use super::verifier::Verifier;
use core::fmt;
use edsig_api::{Error, MessageSigner, Result, PUBLIC_KEY_LENGTH, SEED_LENGTH, SIGNATURE_LENGTH};
use edsig_common::SecretBuffer;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(feature = "rand")]
use rand::{CryptoRng, RngCore};

/// Secret half of the seed expansion
#[derive(Zeroize, ZeroizeOnDrop)]
struct ExpandedSecret {
    /// Clamped secret scalar `a`, reduced mod L
    scalar: Scalar,
    /// Upper half of SHA-512(seed), keys the deterministic nonce
    nonce_prefix: SecretBuffer<32>,
}

impl ExpandedSecret {
    fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        let digest = sha512(&[&seed[..]]);

        let mut scalar_bytes = Zeroizing::new([0u8; 32]);
        scalar_bytes.copy_from_slice(&digest[..32]);
        clamp(&mut scalar_bytes);

        let mut nonce_prefix = SecretBuffer::zeroed();
        nonce_prefix.as_mut_bytes().copy_from_slice(&digest[32..]);

        ExpandedSecret {
            scalar: Scalar::from_bytes_mod_order(&scalar_bytes),
            nonce_prefix,
        }
    }
}

/// Clear the cofactor bits, clear bit 255 and set bit 254
fn clamp(bytes: &mut [u8; 32]) {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
}

/// Deterministic Ed25519 signer
///
/// Immutable after construction, so a shared reference may sign from
/// several threads at once.
pub struct Signer {
    secret: ExpandedSecret,
    public_key: PublicKey,
}

impl Signer {
    /// Derive the signing key and public key from a 32-byte seed
    ///
    /// Fails with [`Error::InvalidSeedLength`] for any other length.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let seed: &[u8; SEED_LENGTH] = seed.try_into().map_err(|_| {
            debug!(actual = seed.len(), "rejected Ed25519 seed of wrong length");
            Error::seed_length(seed.len())
        })?;

        let secret = ExpandedSecret::from_seed(seed);
        let public_key = PublicKey(encode_point(&EdwardsPoint::mul_base(&secret.scalar)));

        Ok(Signer { secret, public_key })
    }

    /// Sign `message`
    ///
    /// Deterministic: the same seed and message always give the same bytes.
    pub fn sign(&self, message: &[u8]) -> Signature {
        // r = H(prefix || M) mod L
        let nonce_digest = sha512(&[&self.secret.nonce_prefix.as_bytes()[..], message]);
        let r = Scalar::from_bytes_mod_order_wide(&nonce_digest);

        let big_r = encode_point(&EdwardsPoint::mul_base(&r));

        // k = H(R || A || M) mod L
        let challenge = sha512(&[&big_r[..], &self.public_key.0[..], message]);
        let k = Scalar::from_bytes_mod_order_wide(&challenge);

        // S = r + k·a mod L
        let s = k.mul_add(&self.secret.scalar, &r);

        Signature::from_parts(&big_r, &encode_scalar(&s))
    }

    /// The public key matching this signer
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// A verifier for signatures made by this signer
    pub fn verifier(&self) -> Verifier {
        Verifier::new(&self.public_key)
    }

    /// Length of the public key in bytes (32)
    pub fn public_key_len(&self) -> usize {
        PUBLIC_KEY_LENGTH
    }

    /// Length of every signature in bytes (64)
    pub fn signature_len(&self) -> usize {
        SIGNATURE_LENGTH
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", &self.public_key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl MessageSigner for Signer {
    fn public_key_len(&self) -> usize {
        PUBLIC_KEY_LENGTH
    }

    fn signature_len(&self) -> usize {
        SIGNATURE_LENGTH
    }

    fn sign_into(&self, message: &[u8], out: &mut [u8]) -> Result<()> {
        if out.len() != SIGNATURE_LENGTH {
            return Err(Error::signature_length(out.len()));
        }
        out.copy_from_slice(self.sign(message).as_ref());
        Ok(())
    }
}

/// Generate a fresh seed and its public key
///
/// The seed is the only secret a caller needs to persist; feed it back
/// through [`Signer::from_seed`] to sign.
#[cfg(feature = "rand")]
pub fn generate_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<(SecretBuffer<SEED_LENGTH>, PublicKey)> {
    let mut seed = SecretBuffer::zeroed();
    rng.try_fill_bytes(seed.as_mut_bytes())
        .map_err(|e| Error::Rng {
            context: "Ed25519 key generation",
            message: e.to_string(),
        })?;

    let signer = Signer::from_seed(seed.as_bytes())?;
    Ok((seed, *signer.public_key()))
}
