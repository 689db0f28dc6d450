//! 128-bit unsigned integer primitive
//!
//! The value is stored as a `(high, low)` pair of 64-bit limbs and
//! represents `high·2⁶⁴ + low`.

use crate::error::{ArithmeticError, Result};
use crate::primitives::DivMod;
use crate::primitives::limb::{Limb, div_two_by_one};

/// Fixed-size 128-bit unsigned integer.
///
/// The field order matters: the derived ordering compares `high` first and
/// uses `low` as the tiebreak, which is the numeric order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U128 {
    pub(crate) high: u64,
    pub(crate) low: u64,
}

impl U128 {
    /// Width of the type in bits.
    pub const BITS: u32 = 128;

    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(0, 1);

    pub const TWO: Self = Self::new(0, 2);
    pub const TEN: Self = Self::new(0, 10);

    /// The smallest representable value, zero.
    pub const MIN: Self = Self::ZERO;

    /// The largest representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// Builds a value from its most and least significant limbs.
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// The most significant 64 bits.
    pub const fn high(self) -> u64 {
        self.high
    }

    /// The least significant 64 bits.
    pub const fn low(self) -> u64 {
        self.low
    }

    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Counts the number of leading zero bits, in the range `0..=128`.
    pub const fn leading_zeros(self) -> u32 {
        if self.high != 0 {
            self.high.leading_zeros()
        } else {
            64 + self.low.leading_zeros()
        }
    }

    /// Wrapping addition that also reports whether the sum wrapped.
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let low = self.low.wrapping_add(rhs.low);
        let carry = (low < self.low) as u64;

        let (high, overflow_a) = self.high.overflowing_add(rhs.high);
        let (high, overflow_b) = high.overflowing_add(carry);

        (Self::new(high, low), overflow_a || overflow_b)
    }

    /// Wrapping subtraction that also reports whether the difference wrapped.
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let low = self.low.wrapping_sub(rhs.low);
        let borrow = (low > self.low) as u64;

        let (high, underflow_a) = self.high.overflowing_sub(rhs.high);
        let (high, underflow_b) = high.overflowing_sub(borrow);

        (Self::new(high, low), underflow_a || underflow_b)
    }

    /// The full 128-bit product of two native words.
    pub(crate) fn widening_mul(a: u64, b: u64) -> Self {
        Self::from(a) * Self::from(b)
    }

    /// Divides `self` by `rhs`, returning quotient and remainder.
    ///
    /// # Errors
    /// Returns `ArithmeticError::DivideByZero` when `rhs` is zero.
    pub fn div_mod(self, rhs: Self) -> Result<DivMod<Self>> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }

        let (quotient, remainder) = self.div_rem_nonzero(rhs);

        Ok(DivMod::new(quotient, remainder))
    }

    /// Division core. `rhs` must be non-zero.
    pub(crate) fn div_rem_nonzero(self, rhs: Self) -> (Self, Self) {
        if rhs.high == 0 {
            let divisor = rhs.low;

            if self.high == 0 {
                return (
                    Self::new(0, self.low / divisor),
                    Self::new(0, self.low % divisor),
                );
            }

            let quotient_high = self.high / divisor;
            let remainder_high = self.high % divisor;
            let (quotient_low, remainder) = div_two_by_one(remainder_high, self.low, divisor);

            return (Self::new(quotient_high, quotient_low), Self::new(0, remainder));
        }

        // The divisor spans both limbs, so the quotient fits in one limb.
        // Normalizing the divisor makes the estimate exact or one too large;
        // stepping it down first leaves a single upward correction.
        let shift = rhs.high.leading_zeros();
        let top = (rhs << shift).high;
        let halved = self >> 1;

        let (estimate, _) = div_two_by_one(halved.high, halved.low, top);
        let mut guess = estimate >> (63 - shift);
        if guess != 0 {
            guess -= 1;
        }

        let mut remainder = self - rhs * Self::from(guess);
        if remainder >= rhs {
            guess += 1;
            remainder -= rhs;
        }

        (Self::from(guess), remainder)
    }
}

impl Limb for U128 {
    const BITS: u32 = U128::BITS;
    const ONE: Self = U128::ONE;
    const MAX: Self = U128::MAX;
    const HALF_MASK: Self = U128::new(0, u64::MAX);

    fn leading_zeros(self) -> u32 {
        U128::leading_zeros(self)
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    fn div_rem(self, rhs: Self) -> (Self, Self) {
        self.div_rem_nonzero(rhs)
    }

    fn shl(self, bits: u32) -> Self {
        self << bits
    }

    fn shr(self, bits: u32) -> Self {
        self >> bits
    }

    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    fn or(self, rhs: Self) -> Self {
        self | rhs
    }
}
