//! Arithmetic and bitwise operations for `I128`
//!
//! Two's-complement addition, subtraction and multiplication produce the
//! same bits as their unsigned counterparts, so those operators run the
//! `U128` engine on the raw pattern. Division and right shift are
//! sign-aware and live in `core`.

use crate::primitives::int128::I128;
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Neg, Not, Rem, Shl, ShlAssign,
    Shr, ShrAssign, Sub, SubAssign,
};

/// Addition modulo 2¹²⁸.
impl Add for I128 {
    type Output = I128;

    fn add(self, rhs: I128) -> Self::Output {
        I128::from_bits(self.to_bits() + rhs.to_bits())
    }
}

/// Subtraction modulo 2¹²⁸.
impl Sub for I128 {
    type Output = I128;

    fn sub(self, rhs: I128) -> Self::Output {
        I128::from_bits(self.to_bits() - rhs.to_bits())
    }
}

/// Multiplication modulo 2¹²⁸.
impl Mul for I128 {
    type Output = I128;

    fn mul(self, rhs: I128) -> Self::Output {
        I128::from_bits(self.to_bits() * rhs.to_bits())
    }
}

/// Wrapping negation; `-I128::MIN == I128::MIN`.
impl Neg for I128 {
    type Output = I128;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl Div for I128 {
    type Output = I128;

    fn div(self, rhs: I128) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        self.div_rem_nonzero(rhs).0
    }
}

impl Rem for I128 {
    type Output = I128;

    fn rem(self, rhs: I128) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        self.div_rem_nonzero(rhs).1
    }
}

impl BitAnd for I128 {
    type Output = I128;

    fn bitand(self, rhs: I128) -> Self::Output {
        I128::new(self.high & rhs.high, self.low & rhs.low)
    }
}

impl BitOr for I128 {
    type Output = I128;

    fn bitor(self, rhs: I128) -> Self::Output {
        I128::new(self.high | rhs.high, self.low | rhs.low)
    }
}

impl BitXor for I128 {
    type Output = I128;

    fn bitxor(self, rhs: I128) -> Self::Output {
        I128::new(self.high ^ rhs.high, self.low ^ rhs.low)
    }
}

impl Not for I128 {
    type Output = I128;

    fn not(self) -> Self::Output {
        I128::from_bits(!self.to_bits())
    }
}

/// Left shift. Panics on a negative amount; see `I128::checked_shl`.
impl Shl<i32> for I128 {
    type Output = I128;

    fn shl(self, rhs: i32) -> Self::Output {
        match self.checked_shl(rhs) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Arithmetic right shift. Panics on a negative amount; see
/// `I128::checked_shr`.
impl Shr<i32> for I128 {
    type Output = I128;

    fn shr(self, rhs: i32) -> Self::Output {
        match self.checked_shr(rhs) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl AddAssign for I128 {
    fn add_assign(&mut self, rhs: I128) {
        *self = *self + rhs;
    }
}

impl SubAssign for I128 {
    fn sub_assign(&mut self, rhs: I128) {
        *self = *self - rhs;
    }
}

impl MulAssign for I128 {
    fn mul_assign(&mut self, rhs: I128) {
        *self = *self * rhs;
    }
}

impl ShlAssign<i32> for I128 {
    fn shl_assign(&mut self, rhs: i32) {
        *self = *self << rhs;
    }
}

impl ShrAssign<i32> for I128 {
    fn shr_assign(&mut self, rhs: i32) {
        *self = *self >> rhs;
    }
}
