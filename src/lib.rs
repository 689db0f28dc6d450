//! Fixed-width extended-precision integers
//!
//! This crate provides exact integer arithmetic beyond the native machine
//! word, built entirely from 64-bit unsigned limbs. It is meant for large
//! counters, identifiers and financial quantities that must never silently
//! lose precision to a narrower type.
//!
//! # Module overview
//!
//! - `primitives`
//!   The integer types themselves:
//!   - `U128`: unsigned 128-bit integer, two `u64` limbs
//!   - `I128`: two's-complement signed 128-bit integer, two `u64` limbs
//!   - `U256`: unsigned 256-bit integer, two `U128` limbs
//!
//!   Every type supports comparison, wrapping addition, subtraction and
//!   multiplication, division with remainder, bitwise operators, shifts,
//!   and decimal / hexadecimal / binary text conversion.
//!
//! - `error`
//!   The `ArithmeticError` enum returned by the fallible operations
//!   (division by zero, malformed digit strings, negative signed shifts).
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic
//! - Native fixed-width semantics: results wrap modulo the type width
//! - Plain `Copy` values with no interior state, safe to share freely
//! - Explicit, auditable algorithms over a small number of limbs
//!
//! This crate is not an arbitrary-precision library. Widths are fixed at
//! compile time and nothing grows.

pub mod error;
pub mod primitives;

pub use error::{ArithmeticError, Result};
pub use primitives::{DivMod, I128, U128, U256};
