//! Internal utilities for the edsig library
//!
//! Nothing in this crate is part of the public API. It holds the small
//! constant-time and byte-order helpers shared by the arithmetic layer.

#![cfg_attr(not(test), no_std)]

pub mod constant_time;
pub mod endian;
