//! Canonical 32-byte encodings of points and scalars
//!
//! Decoding is strict: every accepted byte string is the unique encoding of
//! the value it decodes to. Accepting alternate encodings would let a
//! signature be rewritten into a different byte string that still verifies.

use super::constants::EDWARDS_D;
use super::field::FieldElement;
use super::point::EdwardsPoint;
use super::scalar::Scalar;
use edsig_api::SCALAR_LENGTH;
use subtle::{Choice, ConditionallySelectable};
use thiserror::Error;

/// Reasons a 32-byte string is not a valid encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not a canonical point encoding, or no curve point has this encoding
    #[error("invalid point encoding")]
    InvalidEncoding,

    /// Scalar encoding is at least the group order
    #[error("scalar out of range")]
    ScalarOutOfRange,
}

/// Compressed point representation (32 bytes)
///
/// Little-endian y-coordinate with the parity of x in bit 255.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CompressedPoint(pub(crate) [u8; 32]);

impl CompressedPoint {
    /// Create from bytes
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        CompressedPoint(*bytes)
    }

    /// Get bytes
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Decompress to a curve point, rejecting every non-canonical form
    pub fn decompress(&self) -> Result<EdwardsPoint, DecodeError> {
        let mut y_bytes = self.0;
        let sign = (y_bytes[31] >> 7) & 1;
        y_bytes[31] &= 0x7f;

        // y must be below p
        let y = FieldElement::from_bytes(&y_bytes);
        if y.to_bytes() != y_bytes {
            return Err(DecodeError::InvalidEncoding);
        }

        // x² = (y² - 1) / (d·y² + 1)
        let one = FieldElement::one();
        let yy = y.square();
        let u = yy.sub(&one);
        let v = EDWARDS_D.mul(&yy).add(&one);

        let (is_square, mut x) = FieldElement::sqrt_ratio(&u, &v);
        if !bool::from(is_square) {
            return Err(DecodeError::InvalidEncoding);
        }

        // x = 0 has no negative form
        if bool::from(x.is_zero()) && sign == 1 {
            return Err(DecodeError::InvalidEncoding);
        }

        x.conditional_abs();
        let negated = x.neg();
        x.conditional_assign(&negated, Choice::from(sign));

        Ok(EdwardsPoint::from_affine(x, y))
    }
}

impl EdwardsPoint {
    /// Compress point to 32 bytes
    pub fn compress(&self) -> CompressedPoint {
        let recip = self.z.invert();
        let x = self.x.mul(&recip);
        let y = self.y.mul(&recip);

        // canonical y is below 2^255, so bit 255 is free for the sign
        let mut bytes = y.to_bytes();
        bytes[31] |= x.is_negative().unwrap_u8() << 7;

        CompressedPoint(bytes)
    }
}

/// Encode a point to its canonical 32 bytes
pub fn encode_point(point: &EdwardsPoint) -> [u8; 32] {
    point.compress().to_bytes()
}

/// Decode a point from exactly 32 canonical bytes
pub fn decode_point(bytes: &[u8]) -> Result<EdwardsPoint, DecodeError> {
    let bytes: &[u8; 32] = bytes.try_into().map_err(|_| DecodeError::InvalidEncoding)?;
    CompressedPoint::from_bytes(bytes).decompress()
}

/// Encode a scalar as 32 little-endian bytes
pub fn encode_scalar(scalar: &Scalar) -> [u8; SCALAR_LENGTH] {
    scalar.to_bytes()
}

/// Decode a scalar, requiring exactly 32 bytes holding a value below L
pub fn decode_scalar(bytes: &[u8]) -> Result<Scalar, DecodeError> {
    let bytes: &[u8; SCALAR_LENGTH] =
        bytes.try_into().map_err(|_| DecodeError::InvalidEncoding)?;
    Scalar::from_canonical_bytes(bytes).ok_or(DecodeError::ScalarOutOfRange)
}
