//! 128-bit unsigned integer primitive
//!
//! This module defines the `U128` type, a fixed-size 128-bit unsigned
//! integer made of two native `u64` limbs.
//!
//! `U128` never relies on the native 128-bit integer for its arithmetic.
//! Multiplication runs on 32-bit chunks, and division is built from
//! single-word native division plus the 2-by-1 limb step in `limb`. The
//! native `u128` only appears in the lossless conversions.
//!
//! All arithmetic wraps modulo 2¹²⁸, exactly like the native fixed-width
//! integers.

mod conv;
mod core;
mod ops;
mod text;

pub use self::core::U128;
