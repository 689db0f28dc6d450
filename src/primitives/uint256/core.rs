//! 256-bit unsigned integer primitive
//!
//! The value is stored as a `(high, low)` pair of `U128` limbs and
//! represents `high·2¹²⁸ + low`.

use crate::error::{ArithmeticError, Result};
use crate::primitives::limb::div_two_by_one;
use crate::primitives::{DivMod, U128};

/// Fixed-size 256-bit unsigned integer.
///
/// As with `U128`, the derived ordering relies on `high` being declared
/// before `low`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256 {
    pub(crate) high: U128,
    pub(crate) low: U128,
}

impl U256 {
    /// Width of the type in bits.
    pub const BITS: u32 = 256;

    /// The value zero.
    pub const ZERO: Self = Self::new(U128::ZERO, U128::ZERO);

    /// The value one.
    pub const ONE: Self = Self::new(U128::ZERO, U128::ONE);

    pub const TWO: Self = Self::new(U128::ZERO, U128::TWO);
    pub const TEN: Self = Self::new(U128::ZERO, U128::TEN);

    pub const MIN: Self = Self::ZERO;

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self::new(U128::MAX, U128::MAX);

    /// Builds a value from its most and least significant 128-bit limbs.
    pub const fn new(high: U128, low: U128) -> Self {
        Self { high, low }
    }

    pub const fn high(self) -> U128 {
        self.high
    }

    pub const fn low(self) -> U128 {
        self.low
    }

    pub const fn is_zero(self) -> bool {
        self.high.is_zero() && self.low.is_zero()
    }

    /// Counts the number of leading zero bits, in the range `0..=256`.
    pub const fn leading_zeros(self) -> u32 {
        if !self.high.is_zero() {
            self.high.leading_zeros()
        } else {
            128 + self.low.leading_zeros()
        }
    }

    /// Wrapping addition that also reports whether the sum wrapped.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (low, carry) = self.low.overflowing_add(rhs.low);
        let (high, overflow_a) = self.high.overflowing_add(rhs.high);
        let (high, overflow_b) = high.overflowing_add(U128::from(u64::from(carry)));

        (Self::new(high, low), overflow_a || overflow_b)
    }

    /// Wrapping subtraction that also reports whether the difference wrapped.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (low, borrow) = self.low.overflowing_sub(rhs.low);
        let (high, underflow_a) = self.high.overflowing_sub(rhs.high);
        let (high, underflow_b) = high.overflowing_sub(U128::from(u64::from(borrow)));

        (Self::new(high, low), underflow_a || underflow_b)
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
        if rhs.high.is_zero() {
            let divisor = rhs.low;

            if self.high.is_zero() {
                let (quotient, remainder) = self.low.div_rem_nonzero(divisor);
                return (Self::from(quotient), Self::from(remainder));
            }

            let (quotient_high, remainder_high) = self.high.div_rem_nonzero(divisor);
            let (quotient_low, remainder) = div_two_by_one(remainder_high, self.low, divisor);

            return (Self::new(quotient_high, quotient_low), Self::from(remainder));
        }

        // Same single-correction scheme as U128, with 128-bit limbs.
        let shift = rhs.high.leading_zeros();
        let top = (rhs << shift).high;
        let halved = self >> 1;

        let (estimate, _) = div_two_by_one(halved.high, halved.low, top);
        let mut guess = estimate >> (127 - shift);
        if !guess.is_zero() {
            guess -= U128::ONE;
        }

        let mut remainder = self - rhs * Self::from(guess);
        if remainder >= rhs {
            guess += U128::ONE;
            remainder -= rhs;
        }

        (Self::from(guess), remainder)
    }
}
