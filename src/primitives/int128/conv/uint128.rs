//! Bit-pattern conversions between `I128` and `U128`
//!
//! Both directions keep the raw limbs unchanged; only the interpretation of
//! the top bit differs.

use crate::primitives::{I128, U128};

/// Reinterprets the bit pattern of an `I128` as a `U128`.
impl From<I128> for U128 {
    fn from(value: I128) -> Self {
        value.to_bits()
    }
}

/// Reinterprets the bit pattern of a `U128` as an `I128`.
impl From<U128> for I128 {
    fn from(value: U128) -> Self {
        I128::from_bits(value)
    }
}
