//! Limb abstraction and the 2-limb-by-1-limb division step
//!
//! `U128` is built from `u64` limbs and `U256` from `U128` limbs. Both wide
//! types reduce their division to the same primitive: dividing a two-limb
//! value `high·2^W + low` by a single limb `d` with `high < d`, so that the
//! quotient fits in one limb.
//!
//! The `Limb` trait exposes exactly the word-level operations that step
//! needs, with explicit wrapping semantics, so the same routine serves both
//! widths.

/// A fixed-width unsigned word usable as the building block of a wider
/// integer.
pub(crate) trait Limb: Copy + Ord {
    /// Width of the limb in bits.
    const BITS: u32;
    const ONE: Self;

    /// All bits set, i.e. `2^BITS - 1`.
    const MAX: Self;

    /// The lower half of the bits set, i.e. `2^(BITS/2) - 1`.
    const HALF_MASK: Self;

    fn leading_zeros(self) -> u32;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Quotient and remainder of a single-limb division. `rhs` is non-zero.
    fn div_rem(self, rhs: Self) -> (Self, Self);

    /// Logical shifts. `bits` is always below `BITS`.
    fn shl(self, bits: u32) -> Self;
    fn shr(self, bits: u32) -> Self;

    fn and(self, rhs: Self) -> Self;
    fn or(self, rhs: Self) -> Self;
}

impl Limb for u64 {
    const BITS: u32 = u64::BITS;
    const ONE: Self = 1;
    const MAX: Self = u64::MAX;
    const HALF_MASK: Self = 0xFFFF_FFFF;

    fn leading_zeros(self) -> u32 {
        u64::leading_zeros(self)
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        u64::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        u64::wrapping_mul(self, rhs)
    }

    fn div_rem(self, rhs: Self) -> (Self, Self) {
        (self / rhs, self % rhs)
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

/// Divides `high·2^W + low` by `divisor`, returning `(quotient, remainder)`.
///
/// Requires `high < divisor`, which guarantees the quotient fits in a single
/// limb.
///
/// Divisors that fit in half a limb take the short path, which derives
/// `2^W div d` and `2^W mod d` from the all-ones limb without ever widening.
/// Wider divisors would overflow that path's cross product, so they go
/// through normalized long division on half-limb digits instead.
pub(crate) fn div_two_by_one<L: Limb>(high: L, low: L, divisor: L) -> (L, L) {
    debug_assert!(high < divisor);

    if divisor <= L::HALF_MASK {
        short_div(high, low, divisor)
    } else {
        long_div(high, low, divisor)
    }
}

fn short_div<L: Limb>(high: L, low: L, divisor: L) -> (L, L) {
    // 2^W = radix_quotient * d + radix_remainder, computed from 2^W - 1.
    let (mut radix_quotient, mut radix_remainder) = L::MAX.div_rem(divisor);
    radix_remainder = radix_remainder.wrapping_add(L::ONE);
    if radix_remainder >= divisor {
        radix_quotient = radix_quotient.wrapping_add(L::ONE);
        radix_remainder = radix_remainder.wrapping_sub(divisor);
    }

    // high * 2^W = high * radix_quotient * d + high * radix_remainder.
    // Both factors of the cross term are below d < 2^(W/2), so it fits.
    let (cross_quotient, cross_remainder) = radix_remainder.wrapping_mul(high).div_rem(divisor);
    let mid_quotient = radix_quotient.wrapping_mul(high).wrapping_add(cross_quotient);

    let (mut low_quotient, mut low_remainder) = low.div_rem(divisor);
    low_remainder = low_remainder.wrapping_add(cross_remainder);
    if low_remainder >= divisor {
        low_quotient = low_quotient.wrapping_add(L::ONE);
        low_remainder = low_remainder.wrapping_sub(divisor);
    }

    (mid_quotient.wrapping_add(low_quotient), low_remainder)
}

fn long_div<L: Limb>(high: L, low: L, divisor: L) -> (L, L) {
    let half = L::BITS / 2;
    let shift = divisor.leading_zeros();

    let divisor = divisor.shl(shift);
    let divisor_hi = divisor.shr(half);
    let divisor_lo = divisor.and(L::HALF_MASK);

    let numerator = if shift == 0 {
        high
    } else {
        high.shl(shift).or(low.shr(L::BITS - shift))
    };
    let low = low.shl(shift);
    let low_hi = low.shr(half);
    let low_lo = low.and(L::HALF_MASK);

    let (quotient_hi, partial) = quotient_digit(numerator, low_hi, divisor, divisor_hi, divisor_lo);
    let (quotient_lo, remainder) = quotient_digit(partial, low_lo, divisor, divisor_hi, divisor_lo);

    (quotient_hi.shl(half).or(quotient_lo), remainder.shr(shift))
}

/// Computes one half-limb quotient digit of `numerator·2^(W/2) + next`
/// divided by the normalized `divisor`, together with the partial remainder.
///
/// `numerator` is below `divisor`, so the estimate taken from the top half of
/// the divisor is at most two too large.
fn quotient_digit<L: Limb>(numerator: L, next: L, divisor: L, divisor_hi: L, divisor_lo: L) -> (L, L) {
    let half = L::BITS / 2;
    let base = L::ONE.shl(half);

    let (mut digit, mut rest) = numerator.div_rem(divisor_hi);
    while digit >= base || digit.wrapping_mul(divisor_lo) > rest.shl(half).or(next) {
        digit = digit.wrapping_sub(L::ONE);
        rest = rest.wrapping_add(divisor_hi);
        if rest >= base {
            break;
        }
    }

    let remainder = numerator
        .shl(half)
        .or(next)
        .wrapping_sub(digit.wrapping_mul(divisor));

    (digit, remainder)
}

#[cfg(test)]
mod tests {
    use super::div_two_by_one;

    fn reference(high: u64, low: u64, divisor: u64) -> (u64, u64) {
        let wide = ((high as u128) << 64) | low as u128;
        let divisor = divisor as u128;

        ((wide / divisor) as u64, (wide % divisor) as u64)
    }

    #[test]
    fn short_path_matches_native() {
        for &(high, low, divisor) in &[
            (0u64, 0u64, 1u64),
            (0, u64::MAX, 1),
            (6, 12345, 7),
            (0xFFFF_FFFE, u64::MAX, 0xFFFF_FFFF),
            (9, 0x8000_0000_0000_0000, 10),
        ] {
            assert_eq!(div_two_by_one(high, low, divisor), reference(high, low, divisor));
        }
    }

    #[test]
    fn long_path_matches_native() {
        for &(high, low, divisor) in &[
            (0u64, u64::MAX, 0x1_0000_0000u64),
            (0xFFFF_FFFF, 0, 0x1_0000_0000),
            (u64::MAX - 1, u64::MAX, u64::MAX),
            (0x7FFF_FFFF_FFFF_FFFF, 0x1234_5678_9ABC_DEF0, 0x8000_0000_0000_0000),
            (0x1234, 0xDEAD_BEEF_CAFE_BABE, 0x0000_0001_0000_0001),
        ] {
            assert_eq!(div_two_by_one(high, low, divisor), reference(high, low, divisor));
        }
    }
}
