//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are held as five unsigned 51-bit limbs. Every operation runs
//! the same instruction sequence regardless of the limb values; the only
//! branches are on loop counters and on public exponents.

use super::constants::{P_MINUS_2, P_MINUS_5_DIV_8, SQRT_M1};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const LOW_51_BITS: u64 = (1u64 << 51) - 1;

/// 16·p in limb form, added before subtraction so limbs never go negative
const SIXTEEN_P: [u64; 5] = [
    36028797018963664,
    36028797018963952,
    36028797018963952,
    36028797018963952,
    36028797018963952,
];

/// Field element representing a value modulo p = 2^255 - 19
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    /// Zero element
    pub const fn zero() -> Self {
        FieldElement([0, 0, 0, 0, 0])
    }

    /// One element
    pub const fn one() -> Self {
        FieldElement([1, 0, 0, 0, 0])
    }

    /// Load a little-endian encoding, ignoring bit 255
    ///
    /// Values in [p, 2^255) are accepted and reduce to their residue;
    /// callers that need canonicality compare `to_bytes` against the input.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 5];
        let mut acc: u128 = 0;
        let mut bits = 0u32;
        let mut next = 0usize;

        for &byte in bytes.iter() {
            acc |= (byte as u128) << bits;
            bits += 8;
            if bits >= 51 && next < 5 {
                limbs[next] = (acc as u64) & LOW_51_BITS;
                acc >>= 51;
                bits -= 51;
                next += 1;
            }
        }

        FieldElement(limbs)
    }

    /// Canonical little-endian encoding, always in [0, p)
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut limbs = weak_reduce(self.0);

        // q = 1 exactly when the value is >= p
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += 19 * q;
        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BITS;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BITS;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BITS;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BITS;
        limbs[4] &= LOW_51_BITS;

        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut bits = 0u32;
        let mut next = 0usize;

        for limb in limbs.iter() {
            acc |= (*limb as u128) << bits;
            bits += 51;
            while bits >= 8 {
                out[next] = acc as u8;
                acc >>= 8;
                bits -= 8;
                next += 1;
            }
        }
        // 255 bits leave seven for the last byte
        out[31] = acc as u8;

        out
    }

    /// Add two field elements
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        let mut v = [0u64; 5];
        for (i, item) in v.iter_mut().enumerate() {
            *item = self.0[i] + other.0[i];
        }
        FieldElement(weak_reduce(v))
    }

    /// Subtract two field elements
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        let mut v = [0u64; 5];
        for (i, item) in v.iter_mut().enumerate() {
            *item = (self.0[i] + SIXTEEN_P[i]) - other.0[i];
        }
        FieldElement(weak_reduce(v))
    }

    /// Double a field element
    pub fn double(&self) -> FieldElement {
        self.add(self)
    }

    /// Additive inverse
    pub fn neg(&self) -> FieldElement {
        FieldElement::zero().sub(self)
    }

    /// Multiply two field elements
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let a = &self.0;
        let b = &other.0;

        // 2^255 = 19 mod p, so limbs that overflow the fifth position wrap
        // around multiplied by 19
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1 =
            m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2 =
            m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3 =
            m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];
        c1 += c0 >> 51;
        out[0] = (c0 as u64) & LOW_51_BITS;
        c2 += c1 >> 51;
        out[1] = (c1 as u64) & LOW_51_BITS;
        c3 += c2 >> 51;
        out[2] = (c2 as u64) & LOW_51_BITS;
        c4 += c3 >> 51;
        out[3] = (c3 as u64) & LOW_51_BITS;
        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BITS;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BITS;

        FieldElement(out)
    }

    /// Square a field element
    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Raise to a little-endian exponent
    ///
    /// The exponent must be public: its bits drive the control flow.
    pub fn pow(&self, exponent: &[u8; 32]) -> FieldElement {
        let mut result = FieldElement::one();
        for i in (0..256).rev() {
            result = result.square();
            if (exponent[i / 8] >> (i % 8)) & 1 == 1 {
                result = result.mul(self);
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem (0 maps to 0)
    pub fn invert(&self) -> FieldElement {
        self.pow(&P_MINUS_2)
    }

    /// Square root of u/v when it exists
    ///
    /// Returns `(was_square, x)`. When `was_square` is set, `v·x² = u`;
    /// otherwise `x` is meaningless. Uses the single-exponentiation
    /// candidate `x = u·v³·(u·v⁷)^((p-5)/8)` from RFC 8032 §5.1.3.
    pub fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        let v3 = v.square().mul(v);
        let v7 = v3.square().mul(v);
        let mut x = u.mul(&v3).mul(&u.mul(&v7).pow(&P_MINUS_5_DIV_8));

        let check = v.mul(&x.square());
        let correct_sign = check.ct_eq(u);
        let flipped_sign = check.ct_eq(&u.neg());

        let x_prime = x.mul(&sqrt_m1());
        x.conditional_assign(&x_prime, flipped_sign);

        (correct_sign | flipped_sign, x)
    }

    /// The low bit of the canonical encoding
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// Whether the element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&FieldElement::zero())
    }

    /// Replace `self` with its absolute value (even representative)
    pub fn conditional_abs(&mut self) {
        let negative = self.is_negative();
        let negated = self.neg();
        self.conditional_assign(&negated, negative);
    }
}

/// Fold limb overflow back into range, leaving each limb below 2^51 + 2^18
#[inline(always)]
fn weak_reduce(mut limbs: [u64; 5]) -> [u64; 5] {
    let c0 = limbs[0] >> 51;
    let c1 = limbs[1] >> 51;
    let c2 = limbs[2] >> 51;
    let c3 = limbs[3] >> 51;
    let c4 = limbs[4] >> 51;

    limbs[0] &= LOW_51_BITS;
    limbs[1] &= LOW_51_BITS;
    limbs[2] &= LOW_51_BITS;
    limbs[3] &= LOW_51_BITS;
    limbs[4] &= LOW_51_BITS;

    limbs[0] += c4 * 19;
    limbs[1] += c0;
    limbs[2] += c1;
    limbs[3] += c2;
    limbs[4] += c3;

    limbs
}

/// sqrt(-1)
pub(crate) fn sqrt_m1() -> FieldElement {
    FieldElement::from_bytes(&SQRT_M1)
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}
