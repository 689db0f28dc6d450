//! Conversion from `u64` into `I128`

use crate::primitives::I128;

/// Converts a `u64` into an `I128`, zero-extending into the high limb.
impl From<u64> for I128 {
    fn from(value: u64) -> Self {
        I128::new(0, value)
    }
}
