//! Integer conversion utilities
//!
//! Explicit conversions between `U128` and native integer types:
//! - widening conversions are infallible (`From`)
//! - narrowing conversions fail when bits would be lost (`TryFrom`)
//! - conversions to and from the native 128-bit integer are lossless

mod u128;
mod u64;
