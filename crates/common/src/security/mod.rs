//! Security primitives for handling secret key material

pub mod secret;

pub use secret::SecretBuffer;
