//! Primitive types
//!
//! This module defines the fixed-width integer types of the crate.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! wrapping semantics. Each one is a flat `(high, low)` pair of limbs:
//! - `U128`: a 128-bit unsigned integer over two `u64` limbs
//! - `I128`: a 128-bit two's-complement integer over two `u64` limbs
//! - `U256`: a 256-bit unsigned integer over two `U128` limbs
//!
//! The division and text-conversion algorithms are shared between the types
//! through the crate-private `limb` and `radix` modules.

mod div_mod;
mod int128;
mod limb;
mod radix;
mod uint128;
mod uint256;

pub use div_mod::DivMod;

/// Fixed-width integer primitives.
pub use int128::I128;
pub use uint128::U128;
pub use uint256::U256;
