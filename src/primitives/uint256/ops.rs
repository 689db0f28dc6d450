//! Arithmetic and bitwise operations for `U256`
//!
//! Operations mirror `U128` one level up, working on `U128` limbs with
//! wrapping semantics modulo 2²⁵⁶.

use crate::primitives::U128;
use crate::primitives::uint256::U256;
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Not, Rem, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

/// Addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        let low = self.low + rhs.low;
        let mut high = self.high + rhs.high;

        if low < self.low {
            high += U128::ONE;
        }

        U256::new(high, low)
    }
}

/// Subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        let low = self.low - rhs.low;
        let mut high = self.high - rhs.high;

        if low > self.low {
            high -= U128::ONE;
        }

        U256::new(high, low)
    }
}

/// Multiplication modulo 2²⁵⁶.
///
/// Each operand is split into four 64-bit chunks. Every chunk product is an
/// exact `U128`, and only the partial products landing below bit 256 are
/// computed.
impl Mul for U256 {
    type Output = U256;

    fn mul(self, rhs: U256) -> Self::Output {
        let mul = U128::widening_mul;

        // x = x3·2¹⁹² + x2·2¹²⁸ + x1·2⁶⁴ + x0
        let (x3, x2) = (self.high.high, self.high.low);
        let (x1, x0) = (self.low.high, self.low.low);

        // y = y3·2¹⁹² + y2·2¹²⁸ + y1·2⁶⁴ + y0
        let (y3, y2) = (rhs.high.high, rhs.high.low);
        let (y1, y0) = (rhs.low.high, rhs.low.low);

        let z0 = mul(x0, y0);
        let (z1, z1_overflow) = mul(x1, y0).overflowing_add(mul(x0, y1));
        let z2 = mul(x2, y0) + mul(x1, y1) + mul(x0, y2);

        // A carry out of z1 has weight 2¹⁹², the same as z3.
        let z3 = mul(x3, y0)
            + mul(x2, y1)
            + mul(x1, y2)
            + mul(x0, y3)
            + U128::from(u64::from(z1_overflow));

        let low = z0 + (z1 << 64);
        let high = (z1 >> 64) + z2 + (z3 << 64) + U128::from(u64::from(low < z0));

        U256::new(high, low)
    }
}

impl Div for U256 {
    type Output = U256;

    fn div(self, rhs: U256) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        self.div_rem_nonzero(rhs).0
    }
}

impl Rem for U256 {
    type Output = U256;

    fn rem(self, rhs: U256) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        self.div_rem_nonzero(rhs).1
    }
}

impl BitAnd for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        U256::new(self.high & rhs.high, self.low & rhs.low)
    }
}

impl BitOr for U256 {
    type Output = U256;

    fn bitor(self, rhs: U256) -> Self::Output {
        U256::new(self.high | rhs.high, self.low | rhs.low)
    }
}

impl BitXor for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        U256::new(self.high ^ rhs.high, self.low ^ rhs.low)
    }
}

impl Not for U256 {
    type Output = U256;

    fn not(self) -> Self::Output {
        U256::new(!self.high, !self.low)
    }
}

/// Logical left shift. Shifts of 256 bits or more yield zero.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, rhs: u32) -> Self::Output {
        match rhs {
            0 => self,
            1..=127 => U256::new(
                (self.high << rhs) | (self.low >> (128 - rhs)),
                self.low << rhs,
            ),
            128..=255 => U256::new(self.low << (rhs - 128), U128::ZERO),
            _ => U256::ZERO,
        }
    }
}

/// Logical right shift. Shifts of 256 bits or more yield zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, rhs: u32) -> Self::Output {
        match rhs {
            0 => self,
            1..=127 => U256::new(
                self.high >> rhs,
                (self.low >> rhs) | (self.high << (128 - rhs)),
            ),
            128..=255 => U256::new(U128::ZERO, self.high >> (rhs - 128)),
            _ => U256::ZERO,
        }
    }
}

impl AddAssign for U256 {
    fn add_assign(&mut self, rhs: U256) {
        *self = *self + rhs;
    }
}

impl SubAssign for U256 {
    fn sub_assign(&mut self, rhs: U256) {
        *self = *self - rhs;
    }
}

impl MulAssign for U256 {
    fn mul_assign(&mut self, rhs: U256) {
        *self = *self * rhs;
    }
}

impl ShlAssign<u32> for U256 {
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl ShrAssign<u32> for U256 {
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}
