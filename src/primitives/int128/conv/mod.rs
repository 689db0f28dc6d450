//! Integer conversion utilities
//!
//! Explicit conversions between `I128` and native or crate integer types.
//! Signed sources are sign-extended; unsigned sources are zero-extended.

mod i128;
mod i64;
mod u64;
mod uint128;
