//! 128-bit signed integer primitive
//!
//! This module defines the `I128` type, a two's-complement signed 128-bit
//! integer stored exactly like `U128`: two `u64` limbs, with the top bit of
//! the high limb acting as the sign bit.
//!
//! Addition, subtraction, multiplication and the bitwise operators do not
//! care about the sign and reuse the `U128` engine on the raw bit pattern.
//! Comparison, right shift and division do care, and are implemented here.

mod conv;
mod core;
mod ops;
mod text;

pub use self::core::I128;
