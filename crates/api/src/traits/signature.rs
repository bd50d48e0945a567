//! Digital signature traits for edsig
//!
//! The router's message-authentication layer may carry several signature
//! types side by side. These traits give it one object-safe surface for
//! signing and verifying without naming the concrete scheme. Neither trait
//! grants access to secret material.

use crate::error::Result;

/// Static description of a signature scheme's wire formats
pub trait SignatureScheme {
    /// Human-readable algorithm name
    const NAME: &'static str;

    /// Length in bytes of the private seed
    const SEED_LEN: usize;

    /// Length in bytes of an encoded public key
    const PUBLIC_KEY_LEN: usize;

    /// Length in bytes of an encoded signature
    const SIGNATURE_LEN: usize;
}

/// Something that can sign arbitrary messages
pub trait MessageSigner {
    /// Length of the public key this signer corresponds to
    fn public_key_len(&self) -> usize;

    /// Length of every signature this signer produces
    fn signature_len(&self) -> usize;

    /// Sign `message`, writing exactly `signature_len()` bytes to `out`
    ///
    /// Fails with `Error::InvalidSignatureLength` if `out` is not exactly
    /// `signature_len()` bytes long; `out` is left untouched in that case.
    fn sign_into(&self, message: &[u8], out: &mut [u8]) -> Result<()>;

    /// Sign `message` into a freshly allocated buffer
    fn sign_to_vec(&self, message: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.signature_len()];
        self.sign_into(message, &mut out)?;
        Ok(out)
    }
}

/// Something that can check signatures over arbitrary messages
pub trait MessageVerifier {
    /// Length of the public key this verifier holds
    fn public_key_len(&self) -> usize;

    /// Length of the signatures this verifier accepts
    fn signature_len(&self) -> usize;

    /// Returns `true` only for a valid signature over `message`
    ///
    /// Every malformed or forged input yields `false`; this never panics.
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool;
}
