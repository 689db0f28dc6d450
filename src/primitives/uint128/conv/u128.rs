//! Conversions between `U128` and the native 128-bit integer
//!
//! These only move bits; no arithmetic is delegated to the native type.

use crate::primitives::U128;

impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        U128::new((value >> 64) as u64, value as u64)
    }
}

impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        ((value.high as u128) << 64) | value.low as u128
    }
}
