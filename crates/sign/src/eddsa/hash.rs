//! SHA-512 over a sequence of byte slices

use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

/// Hash the concatenation of `parts`
///
/// The digest may be secret (seed expansion, nonce derivation), so it is
/// returned in a buffer that is zeroed when dropped.
pub(crate) fn sha512(parts: &[&[u8]]) -> Zeroizing<[u8; 64]> {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }

    let mut out = Zeroizing::new([0u8; 64]);
    // finalize in place so no unzeroed copy of the digest is left behind
    hasher.finalize_into(GenericArray::from_mut_slice(&mut out[..]));
    out
}
