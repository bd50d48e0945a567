//! Secret data types with guaranteed zeroization
//!
//! Secret bytes live in [`SecretBuffer`], which overwrites its contents
//! with zeros when dropped, on every path that releases it.

use core::fmt;
use edsig_internal::constant_time::ct_eq_choice;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - Redacted `Debug` output
/// - Constant-time equality
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    ///
    /// The argument is a copy; callers holding the source array should
    /// zeroize it themselves.
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Copy a slice of exactly `N` bytes into a new buffer
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != N {
            return None;
        }
        let mut buffer = Self::zeroed();
        buffer.data.copy_from_slice(slice);
        Some(buffer)
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get a reference to the inner data
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_bytes(&mut self) -> &mut [u8; N] {
        &mut self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> ConstantTimeEq for SecretBuffer<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_eq_choice(&self.data, &other.data)
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}
