//! 128-bit two's-complement integer primitive
//!
//! The bit pattern `(high, low)` is read as `high·2⁶⁴ + low − s·2¹²⁸`, where
//! `s` is the top bit of `high`. No separate sign field exists.

use crate::error::{ArithmeticError, Result};
use crate::primitives::{DivMod, U128};
use std::cmp::Ordering;

/// Fixed-size 128-bit signed integer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct I128 {
    pub(crate) high: u64,
    pub(crate) low: u64,
}

impl I128 {
    /// Width of the type in bits.
    pub const BITS: u32 = 128;

    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(0, 1);
    pub const TWO: Self = Self::new(0, 2);
    pub const TEN: Self = Self::new(0, 10);
    pub const MINUS_ONE: Self = Self::new(u64::MAX, u64::MAX);

    /// The smallest value, −2¹²⁷: only the sign bit set.
    pub const MIN: Self = Self::new(1 << 63, 0);

    /// The largest value, 2¹²⁷ − 1: every bit but the sign bit set.
    pub const MAX: Self = Self::new(u64::MAX >> 1, u64::MAX);

    /// Builds a value from the raw bits of its two limbs.
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    pub const fn high(self) -> u64 {
        self.high
    }

    pub const fn low(self) -> u64 {
        self.low
    }

    /// Reinterprets an unsigned bit pattern as a signed value.
    pub const fn from_bits(bits: U128) -> Self {
        Self::new(bits.high, bits.low)
    }

    /// The raw bit pattern as an unsigned value.
    pub const fn to_bits(self) -> U128 {
        U128::new(self.high, self.low)
    }

    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    pub const fn is_negative(self) -> bool {
        self.high >> 63 != 0
    }

    /// Returns `-1` for negative values, `0` for zero and `1` otherwise.
    pub const fn signum(self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Two's-complement negation: complement both limbs, then add one.
    ///
    /// `MIN` has no positive counterpart and negates to itself.
    pub fn wrapping_neg(self) -> Self {
        Self::from_bits(!self.to_bits() + U128::ONE)
    }

    /// Absolute value. `MIN.abs()` wraps back to `MIN`.
    pub fn abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Exact magnitude as an unsigned value; `MIN` maps to 2¹²⁷.
    pub fn unsigned_abs(self) -> U128 {
        self.abs().to_bits()
    }

    /// Shift left by `amount` bits, zero filling. Shifts of 128 or more
    /// yield zero.
    ///
    /// # Errors
    /// Returns `ArithmeticError::NegativeShiftAmount` when `amount < 0`.
    pub fn checked_shl(self, amount: i32) -> Result<Self> {
        let amount = shift_amount(amount)?;

        Ok(Self::from_bits(self.to_bits() << amount))
    }

    /// Arithmetic shift right by `amount` bits: vacated bits copy the sign
    /// bit. Shifts of 128 or more yield `MINUS_ONE` for negative values and
    /// zero otherwise.
    ///
    /// # Errors
    /// Returns `ArithmeticError::NegativeShiftAmount` when `amount < 0`.
    pub fn checked_shr(self, amount: i32) -> Result<Self> {
        let amount = shift_amount(amount)?;
        let fill = if self.is_negative() { u64::MAX } else { 0 };
        let high = self.high as i64;

        Ok(match amount {
            0 => self,
            1..=63 => Self::new(
                (high >> amount) as u64,
                (self.low >> amount) | (self.high << (64 - amount)),
            ),
            64..=127 => Self::new(fill, (high >> (amount - 64)) as u64),
            _ => Self::new(fill, fill),
        })
    }

    /// Divides `self` by `rhs`, returning quotient and remainder.
    ///
    /// The magnitudes are divided as unsigned values, then the signs are
    /// reapplied so that the remainder is never negative:
    ///
    /// | dividend | divisor | quotient                  | remainder           |
    /// |----------|---------|---------------------------|---------------------|
    /// | < 0      | < 0     | `q + 1` if inexact        | `abs(rhs) - r` if inexact |
    /// | < 0      | >= 0    | `-(q + 1)` if inexact, else `-q` | `abs(rhs) - r` if inexact |
    /// | >= 0     | < 0     | `-q`                      | `r`                 |
    /// | >= 0     | >= 0    | `q`                       | `r`                 |
    ///
    /// A negative dividend rounds so that the remainder stays non-negative,
    /// while a non-negative dividend truncates toward zero.
    /// `MIN / -1` wraps to `MIN` with remainder zero.
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
        let divisor_abs = rhs.unsigned_abs();
        let (quotient, remainder) = self.unsigned_abs().div_rem_nonzero(divisor_abs);
        let inexact = !remainder.is_zero();

        match (self.is_negative(), rhs.is_negative()) {
            (true, true) if inexact => (
                Self::from_bits(quotient + U128::ONE),
                Self::from_bits(divisor_abs - remainder),
            ),
            (true, false) if inexact => (
                Self::from_bits(quotient + U128::ONE).wrapping_neg(),
                Self::from_bits(divisor_abs - remainder),
            ),
            (true, false) | (false, true) => (
                Self::from_bits(quotient).wrapping_neg(),
                Self::from_bits(remainder),
            ),
            _ => (Self::from_bits(quotient), Self::from_bits(remainder)),
        }
    }
}

fn shift_amount(amount: i32) -> Result<u32> {
    u32::try_from(amount).map_err(|_| ArithmeticError::NegativeShiftAmount(amount))
}

/// Signed ordering.
///
/// Raw limb order breaks across the sign boundary, so signs are compared
/// first. Two negative values are negated into magnitudes and compared in
/// reverse.
impl Ord for I128 {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        if self.is_negative() {
            let (lhs, rhs) = (self.wrapping_neg(), other.wrapping_neg());
            (lhs.high, lhs.low).cmp(&(rhs.high, rhs.low)).reverse()
        } else {
            (self.high, self.low).cmp(&(other.high, other.low))
        }
    }
}

impl PartialOrd for I128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
