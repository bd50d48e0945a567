//! Scalar arithmetic modulo L = 2^252 + 27742317777372353535851937790883648493
//!
//! Scalars are four little-endian 64-bit limbs, always reduced below L.
//! Reduction shifts the input in one bit at a time and conditionally
//! subtracts L with a mask, so the instruction trace depends only on the
//! input width, never on its value.

use super::constants::CURVE_ORDER;
use edsig_internal::constant_time::{choice_from_bit, ct_lt_limbs, mask_from_choice};
use edsig_internal::endian::{limbs_from_le_bytes, limbs_to_le_bytes};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Scalar value modulo L, zeroed when dropped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar {
    pub(crate) limbs: [u64; 4],
}

impl Scalar {
    /// Zero scalar
    #[cfg(test)]
    pub const fn zero() -> Self {
        Scalar { limbs: [0; 4] }
    }

    /// One
    #[cfg(test)]
    pub const fn one() -> Self {
        Scalar {
            limbs: [1, 0, 0, 0],
        }
    }

    /// Reduce a 256-bit little-endian integer modulo L
    pub fn from_bytes_mod_order(bytes: &[u8; 32]) -> Self {
        let mut wide: [u64; 4] = limbs_from_le_bytes(bytes);
        let limbs = reduce_limbs(&wide);
        wide.zeroize();
        Scalar { limbs }
    }

    /// Reduce a 512-bit little-endian integer (a SHA-512 digest) modulo L
    pub fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        let mut wide: [u64; 8] = limbs_from_le_bytes(bytes);
        let limbs = reduce_limbs(&wide);
        wide.zeroize();
        Scalar { limbs }
    }

    /// Accept only the canonical encoding of a value below L
    pub fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let limbs: [u64; 4] = limbs_from_le_bytes(bytes);
        if bool::from(ct_lt_limbs(&limbs, &CURVE_ORDER)) {
            Some(Scalar { limbs })
        } else {
            None
        }
    }

    /// Little-endian encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        limbs_to_le_bytes(&self.limbs, &mut out);
        out
    }

    /// (self + other) mod L
    pub fn add(&self, other: &Scalar) -> Scalar {
        // both operands are below L < 2^253, so the sum fits in 254 bits
        let mut sum = [0u64; 4];
        let mut carry = 0u64;
        for (i, limb) in sum.iter_mut().enumerate() {
            let (s1, c1) = self.limbs[i].overflowing_add(other.limbs[i]);
            let (s2, c2) = s1.overflowing_add(carry);
            *limb = s2;
            carry = (c1 | c2) as u64;
        }
        Scalar {
            limbs: sub_order_if_needed(sum),
        }
    }

    /// (self · other) mod L
    pub fn mul(&self, other: &Scalar) -> Scalar {
        let mut wide = [0u64; 8];
        for i in 0..4 {
            let mut carry: u128 = 0;
            for j in 0..4 {
                let t = (self.limbs[i] as u128) * (other.limbs[j] as u128)
                    + wide[i + j] as u128
                    + carry;
                wide[i + j] = t as u64;
                carry = t >> 64;
            }
            wide[i + 4] = carry as u64;
        }

        let limbs = reduce_limbs(&wide);
        wide.zeroize();
        Scalar { limbs }
    }

    /// (self · b + c) mod L
    pub fn mul_add(&self, b: &Scalar, c: &Scalar) -> Scalar {
        self.mul(b).add(c)
    }

    /// Whether the scalar is zero
    #[cfg(test)]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Scalar::zero())
    }
}

/// Reduce an arbitrary-width little-endian integer modulo L
fn reduce_limbs<const N: usize>(input: &[u64; N]) -> [u64; 4] {
    let mut r = [0u64; 4];

    for i in (0..N * 64).rev() {
        // r = 2r + bit; r < L < 2^253 keeps this within four limbs
        let mut carry = (input[i / 64] >> (i % 64)) & 1;
        for limb in r.iter_mut() {
            let next = *limb >> 63;
            *limb = (*limb << 1) | carry;
            carry = next;
        }
        r = sub_order_if_needed(r);
    }

    r
}

/// Subtract L once when the value is at least L
fn sub_order_if_needed(value: [u64; 4]) -> [u64; 4] {
    let mut diff = [0u64; 4];
    let mut borrow = 0u64;
    for (i, limb) in diff.iter_mut().enumerate() {
        let (d1, b1) = value[i].overflowing_sub(CURVE_ORDER[i]);
        let (d2, b2) = d1.overflowing_sub(borrow);
        *limb = d2;
        borrow = (b1 | b2) as u64;
    }

    // borrow == 0 means value >= L: keep the difference
    let keep_diff = mask_from_choice(choice_from_bit(borrow ^ 1));
    let mut out = [0u64; 4];
    for i in 0..4 {
        out[i] = (value[i] & !keep_diff) | (diff[i] & keep_diff);
    }
    out
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}
