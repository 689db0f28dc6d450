//! Conversions between `I128` and the native signed 128-bit integer
//!
//! These only move bits; no arithmetic is delegated to the native type.

use crate::primitives::I128;

impl From<i128> for I128 {
    fn from(value: i128) -> Self {
        I128::new((value >> 64) as u64, value as u64)
    }
}

impl From<I128> for i128 {
    fn from(value: I128) -> Self {
        (((value.high as u128) << 64) | value.low as u128) as i128
    }
}
