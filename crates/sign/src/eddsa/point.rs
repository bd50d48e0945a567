//! Edwards curve point operations for Ed25519
//!
//! This module implements point arithmetic on the twisted Edwards curve
//! -x² + y² = 1 + d·x²·y² where d = -121665/121666

use super::constants::{BASE_X, BASE_Y, EDWARDS_D2};
use super::field::FieldElement;
use super::scalar::Scalar;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroizing;

/// Point on the twisted Edwards curve
#[derive(Clone, Copy)]
pub struct EdwardsPoint {
    // Extended coordinates (X:Y:Z:T) where x=X/Z, y=Y/Z, xy=T/Z
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl EdwardsPoint {
    /// Identity element (neutral element for addition)
    pub fn identity() -> Self {
        EdwardsPoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::one(),
            t: FieldElement::zero(),
        }
    }

    /// Base point generator
    pub fn basepoint() -> Self {
        let x = FieldElement::from_bytes(&BASE_X);
        let y = FieldElement::from_bytes(&BASE_Y);
        Self::from_affine(x, y)
    }

    pub(crate) fn from_affine(x: FieldElement, y: FieldElement) -> Self {
        EdwardsPoint {
            x,
            y,
            z: FieldElement::one(),
            t: x.mul(&y),
        }
    }

    /// Add two points
    ///
    /// Unified formula for a = -1 (Hisil–Wong–Carter–Dawson), complete on
    /// this curve, so it also covers doubling and the identity.
    pub fn add(&self, other: &EdwardsPoint) -> EdwardsPoint {
        let a = self.y.sub(&self.x).mul(&other.y.sub(&other.x));
        let b = self.y.add(&self.x).mul(&other.y.add(&other.x));
        let c = self.t.mul(&other.t).mul(&EDWARDS_D2);
        let d = self.z.double().mul(&other.z);
        let e = b.sub(&a);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.add(&a);

        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Double a point
    pub fn double(&self) -> EdwardsPoint {
        self.add(self)
    }

    /// Negate a point: (x, y) -> (-x, y)
    #[cfg(test)]
    pub fn neg(&self) -> EdwardsPoint {
        EdwardsPoint {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
            t: self.t.neg(),
        }
    }

    /// Multiply by the cofactor 8
    pub fn mul_by_cofactor(&self) -> EdwardsPoint {
        self.double().double().double()
    }

    /// Constant-time scalar multiplication
    ///
    /// Fixed 4-bit window, most significant nibble first. Each window entry
    /// is fetched by scanning the whole table with a masked select, so
    /// neither the sequence of operations nor the memory touched depends on
    /// the scalar.
    pub fn mul(&self, scalar: &Scalar) -> EdwardsPoint {
        let mut table = [EdwardsPoint::identity(); 16];
        for i in 1..16 {
            table[i] = table[i - 1].add(self);
        }

        let bytes = Zeroizing::new(scalar.to_bytes());
        let mut result = EdwardsPoint::identity();

        for i in (0..64).rev() {
            let nibble = (bytes[i / 2] >> ((i & 1) * 4)) & 0x0f;
            result = result.double().double().double().double();
            result = result.add(&select_from_table(&table, nibble));
        }

        result
    }

    /// Constant-time multiplication of the base point
    pub fn mul_base(scalar: &Scalar) -> EdwardsPoint {
        EdwardsPoint::basepoint().mul(scalar)
    }

    /// Whether this is the neutral element
    #[cfg(test)]
    pub fn is_identity(&self) -> bool {
        self.ct_eq(&EdwardsPoint::identity()).into()
    }

    /// Check if this point is on the curve
    #[cfg(test)]
    pub fn is_on_curve(&self) -> bool {
        use super::constants::EDWARDS_D;

        // (-X² + Y²)·Z² = Z⁴ + d·X²·Y², and X·Y = Z·T
        let d = EDWARDS_D;
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();

        let lhs = yy.sub(&xx).mul(&zz);
        let rhs = zz.square().add(&d.mul(&xx).mul(&yy));
        let extended = self.x.mul(&self.y) == self.z.mul(&self.t);

        lhs == rhs && extended
    }
}

/// Fetch `table[index]` without an index-dependent memory access
fn select_from_table(table: &[EdwardsPoint; 16], index: u8) -> EdwardsPoint {
    let mut selected = EdwardsPoint::identity();
    for (i, entry) in table.iter().enumerate() {
        selected.conditional_assign(entry, (i as u8).ct_eq(&index));
    }
    selected
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdwardsPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    /// Projective equality: X1·Z2 = X2·Z1 and Y1·Z2 = Y2·Z1
    fn ct_eq(&self, other: &Self) -> Choice {
        let x_eq = self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z));
        let y_eq = self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z));
        x_eq & y_eq
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}
