//! Endianness utility functions

/// Read a u64 from the first eight bytes of `bytes`, little-endian
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Unpack a little-endian byte string into 64-bit limbs
///
/// `bytes` must be exactly `8 * N` long.
pub fn limbs_from_le_bytes<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert_eq!(bytes.len(), 8 * N);
    let mut limbs = [0u64; N];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        *limb = u64_from_le_bytes(chunk);
    }
    limbs
}

/// Pack 64-bit limbs into a little-endian byte string
///
/// `out` must be exactly `8 * N` long.
pub fn limbs_to_le_bytes<const N: usize>(limbs: &[u64; N], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 8 * N);
    for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
}
