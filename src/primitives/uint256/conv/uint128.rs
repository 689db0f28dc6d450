//! Conversions between `U256` and its 128-bit limbs

use crate::primitives::{U128, U256};

/// Converts a `U128` into a `U256`.
///
/// The value is placed in the low limb, with the high limb set to zero.
impl From<U128> for U256 {
    fn from(value: U128) -> Self {
        U256::new(U128::ZERO, value)
    }
}

/// Converts two limbs, ordered `[high, low]`, into a `U256`.
impl From<[U128; 2]> for U256 {
    fn from(value: [U128; 2]) -> Self {
        U256::new(value[0], value[1])
    }
}

/// Splits a `U256` into its limbs, ordered `[high, low]`.
impl From<U256> for [U128; 2] {
    fn from(value: U256) -> Self {
        [value.high, value.low]
    }
}

/// Attempts to convert a `U256` into a `U128`.
///
/// The conversion succeeds only if the high limb is zero.
impl TryFrom<U256> for U128 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if !value.high.is_zero() {
            return Err(());
        }

        Ok(value.low)
    }
}
