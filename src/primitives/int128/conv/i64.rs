//! Conversions between `I128` and 64-bit signed integers

use crate::primitives::I128;

/// Converts an `i64` into an `I128`, sign-extending into the high limb.
impl From<i64> for I128 {
    fn from(value: i64) -> Self {
        let high = if value < 0 { u64::MAX } else { 0 };

        I128::new(high, value as u64)
    }
}

/// Attempts to convert an `I128` into an `i64`.
///
/// The conversion succeeds only if the high limb is the sign extension of
/// the low limb.
impl TryFrom<I128> for i64 {
    type Error = ();

    fn try_from(value: I128) -> Result<Self, Self::Error> {
        let low = value.low as i64;
        let extension = if low < 0 { u64::MAX } else { 0 };

        if value.high != extension {
            return Err(());
        }

        Ok(low)
    }
}
