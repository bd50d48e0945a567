//! Wire types: the 32-byte public key and the 64-byte signature

use core::fmt;
use edsig_api::{Error, Result, PUBLIC_KEY_LENGTH, SCALAR_LENGTH, SIGNATURE_LENGTH};

/// Ed25519 public key (compressed point, 32 bytes)
///
/// Holding a `PublicKey` says nothing about whether the bytes decode to a
/// curve point; that is checked once when a [`Verifier`](super::Verifier)
/// is built from it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub(crate) [u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Wrap key material, checking only its length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| Error::public_key_length(bytes.len()))?;
        Ok(PublicKey(bytes))
    }

    /// Borrow the encoded key
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    /// Copy out the encoded key
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        PublicKey(bytes)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

/// Ed25519 signature (64 bytes: R || S)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub(crate) [u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Wrap signature material, checking only its length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SIGNATURE_LENGTH] = bytes
            .try_into()
            .map_err(|_| Error::signature_length(bytes.len()))?;
        Ok(Signature(bytes))
    }

    pub(crate) fn from_parts(r: &[u8; 32], s: &[u8; SCALAR_LENGTH]) -> Self {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(r);
        bytes[32..].copy_from_slice(s);
        Signature(bytes)
    }

    /// The encoded commitment point R
    pub fn r_bytes(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        r
    }

    /// The encoded response scalar S
    pub fn s_bytes(&self) -> [u8; SCALAR_LENGTH] {
        let mut s = [0u8; SCALAR_LENGTH];
        s.copy_from_slice(&self.0[32..]);
        s
    }

    /// Copy out the encoded signature
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.0
    }
}

impl From<[u8; SIGNATURE_LENGTH]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Signature(bytes)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}
