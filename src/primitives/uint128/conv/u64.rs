//! Conversions between `U128` and 64-bit words

use crate::primitives::U128;

/// Converts a `u64` into a `U128`.
///
/// The value is zero-extended into the low limb.
impl From<u64> for U128 {
    fn from(value: u64) -> Self {
        U128::new(0, value)
    }
}

/// Converts two 64-bit limbs, ordered `[high, low]`, into a `U128`.
impl From<[u64; 2]> for U128 {
    fn from(value: [u64; 2]) -> Self {
        U128::new(value[0], value[1])
    }
}

/// Splits a `U128` into its limbs, ordered `[high, low]`.
impl From<U128> for [u64; 2] {
    fn from(value: U128) -> Self {
        [value.high, value.low]
    }
}

/// Attempts to convert a `U128` into a `u64`.
///
/// The conversion succeeds only if the high limb is zero.
impl TryFrom<U128> for u64 {
    type Error = ();

    fn try_from(value: U128) -> Result<Self, Self::Error> {
        if value.high != 0 {
            return Err(());
        }

        Ok(value.low)
    }
}
