//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Compare two little-endian multi-limb integers in constant time
///
/// Returns a set Choice when `a < b`. Every limb is visited regardless
/// of where the first difference lies.
pub fn ct_lt_limbs<const N: usize>(a: &[u64; N], b: &[u64; N]) -> Choice {
    let mut lt = Choice::from(0);
    let mut eq = Choice::from(1);

    for i in (0..N).rev() {
        lt |= eq & a[i].ct_lt(&b[i]);
        eq &= a[i].ct_eq(&b[i]);
    }

    lt
}

/// Turn the low bit of a word into a Choice without branching
#[inline]
pub fn choice_from_bit(bit: u64) -> Choice {
    Choice::from((bit & 1) as u8)
}

/// Expand a Choice into an all-ones or all-zeros 64-bit mask
#[inline]
pub fn mask_from_choice(choice: Choice) -> u64 {
    0u64.wrapping_sub(choice.unwrap_u8() as u64)
}
