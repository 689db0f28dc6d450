//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer made of two `U128` limbs.
//!
//! `U256` follows the `U128` design one level up: the limbs are 128 bits
//! wide, multiplication runs on 64-bit chunks whose products come from the
//! `U128` engine, and division reuses the same 2-by-1 limb step with
//! `U128::MAX` as the all-ones limb.
//!
//! All arithmetic wraps modulo 2²⁵⁶.

mod conv;
mod core;
mod ops;
mod text;

pub use self::core::U256;
