//! Fixed wire lengths for Ed25519 key material and signatures

/// Length in bytes of a private seed
pub const SEED_LENGTH: usize = 32;

/// Length in bytes of a compressed public key
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length in bytes of a signature (`R || S`)
pub const SIGNATURE_LENGTH: usize = 64;

/// Length in bytes of an encoded scalar
pub const SCALAR_LENGTH: usize = 32;
