//! Error type shared by every fallible operation in the crate.
//!
//! Arithmetic on the fixed-width types is total and wraps silently, so the
//! only failures are the ones a native integer would also refuse: dividing
//! by zero, parsing a malformed digit string, and shifting a signed value by
//! a negative amount.

use thiserror::Error;

/// Errors raised by the fallible operations of `U128`, `I128` and `U256`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The divisor equals zero.
    #[error("division by zero")]
    DivideByZero,

    /// A byte of the parsed input is not a digit of the expected radix.
    #[error("invalid digit {byte:#04x} at position {position}")]
    InvalidDigit { position: usize, byte: u8 },

    /// A signed shift was requested with a negative amount.
    #[error("negative shift amount: {0}")]
    NegativeShiftAmount(i32),

    /// A hexadecimal or binary string lacks its `0x` / `0b` marker.
    #[error("missing radix prefix `{0}`")]
    MissingRadixPrefix(&'static str),
}

pub type Result<T> = core::result::Result<T, ArithmeticError>;
