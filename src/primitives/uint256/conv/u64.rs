//! Conversions between `U256` and 64-bit words

use crate::primitives::{U128, U256};

/// Converts a `u64` into a `U256`, zero-extending it.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256::new(U128::ZERO, U128::from(value))
    }
}

/// Converts four 64-bit words, most significant first, into a `U256`.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        U256::new(
            U128::new(value[0], value[1]),
            U128::new(value[2], value[3]),
        )
    }
}

/// Splits a `U256` into four 64-bit words, most significant first.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        [value.high.high, value.high.low, value.low.high, value.low.low]
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits are zero.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if !value.high.is_zero() || value.low.high != 0 {
            return Err(());
        }

        Ok(value.low.low)
    }
}
