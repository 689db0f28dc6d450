//! Arithmetic and bitwise operations for `U128`
//!
//! All operations work limb by limb on native `u64` words, with:
//! - no heap allocation
//! - wrapping semantics modulo 2¹²⁸
//! - panics only where native integers panic (division by zero)

use crate::primitives::uint128::U128;
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Not, Rem, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

/// Addition modulo 2¹²⁸.
impl Add for U128 {
    type Output = U128;

    fn add(self, rhs: U128) -> Self::Output {
        let low = self.low.wrapping_add(rhs.low);
        let mut high = self.high.wrapping_add(rhs.high);

        if low < self.low {
            high = high.wrapping_add(1);
        }

        U128::new(high, low)
    }
}

/// Subtraction modulo 2¹²⁸.
impl Sub for U128 {
    type Output = U128;

    fn sub(self, rhs: U128) -> Self::Output {
        let low = self.low.wrapping_sub(rhs.low);
        let mut high = self.high.wrapping_sub(rhs.high);

        if low > self.low {
            high = high.wrapping_sub(1);
        }

        U128::new(high, low)
    }
}

/// Multiplication modulo 2¹²⁸.
///
/// Each operand is split into four 32-bit chunks so that every partial
/// product fits a native word. Only the partial products landing below bit
/// 128 are computed.
impl Mul for U128 {
    type Output = U128;

    fn mul(self, rhs: U128) -> Self::Output {
        const MASK: u64 = 0xFFFF_FFFF;

        // x = x3·2⁹⁶ + x2·2⁶⁴ + x1·2³² + x0
        let (x3, x2) = (self.high >> 32, self.high & MASK);
        let (x1, x0) = (self.low >> 32, self.low & MASK);

        // y = y3·2⁹⁶ + y2·2⁶⁴ + y1·2³² + y0
        let (y3, y2) = (rhs.high >> 32, rhs.high & MASK);
        let (y1, y0) = (rhs.low >> 32, rhs.low & MASK);

        let z0 = x0 * y0;
        let (z1, z1_overflow) = (x1 * y0).overflowing_add(x0 * y1);
        let z2 = (x2 * y0).wrapping_add(x1 * y1).wrapping_add(x0 * y2);

        // A carry out of z1 has weight 2⁹⁶, the same as z3.
        let z3 = (x3 * y0)
            .wrapping_add(x2 * y1)
            .wrapping_add(x1 * y2)
            .wrapping_add(x0 * y3)
            .wrapping_add(u64::from(z1_overflow));

        let low = z0.wrapping_add(z1 << 32);
        let high = (z1 >> 32)
            .wrapping_add(z2)
            .wrapping_add(z3 << 32)
            .wrapping_add(u64::from(low < z0));

        U128::new(high, low)
    }
}

/// Integer division producing the quotient.
impl Div for U128 {
    type Output = U128;

    fn div(self, rhs: U128) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        self.div_rem_nonzero(rhs).0
    }
}

/// Integer division producing the remainder.
impl Rem for U128 {
    type Output = U128;

    fn rem(self, rhs: U128) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        self.div_rem_nonzero(rhs).1
    }
}

impl BitAnd for U128 {
    type Output = U128;

    fn bitand(self, rhs: U128) -> Self::Output {
        U128::new(self.high & rhs.high, self.low & rhs.low)
    }
}

impl BitOr for U128 {
    type Output = U128;

    fn bitor(self, rhs: U128) -> Self::Output {
        U128::new(self.high | rhs.high, self.low | rhs.low)
    }
}

impl BitXor for U128 {
    type Output = U128;

    fn bitxor(self, rhs: U128) -> Self::Output {
        U128::new(self.high ^ rhs.high, self.low ^ rhs.low)
    }
}

impl Not for U128 {
    type Output = U128;

    fn not(self) -> Self::Output {
        U128::new(!self.high, !self.low)
    }
}

/// Logical left shift.
///
/// Shifts of 128 bits or more yield zero.
impl Shl<u32> for U128 {
    type Output = U128;

    fn shl(self, rhs: u32) -> Self::Output {
        match rhs {
            0 => self,
            1..=63 => U128::new(
                (self.high << rhs) | (self.low >> (64 - rhs)),
                self.low << rhs,
            ),
            64..=127 => U128::new(self.low << (rhs - 64), 0),
            _ => U128::ZERO,
        }
    }
}

/// Logical right shift.
///
/// Shifts of 128 bits or more yield zero, matching the left shift.
impl Shr<u32> for U128 {
    type Output = U128;

    fn shr(self, rhs: u32) -> Self::Output {
        match rhs {
            0 => self,
            1..=63 => U128::new(
                self.high >> rhs,
                (self.low >> rhs) | (self.high << (64 - rhs)),
            ),
            64..=127 => U128::new(0, self.high >> (rhs - 64)),
            _ => U128::ZERO,
        }
    }
}

impl AddAssign for U128 {
    fn add_assign(&mut self, rhs: U128) {
        *self = *self + rhs;
    }
}

impl SubAssign for U128 {
    fn sub_assign(&mut self, rhs: U128) {
        *self = *self - rhs;
    }
}

impl MulAssign for U128 {
    fn mul_assign(&mut self, rhs: U128) {
        *self = *self * rhs;
    }
}

impl ShlAssign<u32> for U128 {
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl ShrAssign<u32> for U128 {
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}
