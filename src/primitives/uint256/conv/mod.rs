//! Integer conversion utilities
//!
//! Explicit conversions between `U256`, its `U128` limbs and native words.
//! Limb arrays are always ordered from most to least significant.

mod u64;
mod uint128;
