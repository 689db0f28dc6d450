use wideword::{ArithmeticError, DivMod, U128, U256};

use proptest::prelude::*;

fn big(digits: &str) -> U256 {
    digits.parse().unwrap()
}

fn check_div(dividend: &str, divisor: &str, quotient: &str, remainder: &str) {
    let result = big(dividend).div_mod(big(divisor)).unwrap();

    assert_eq!(result.quotient, big(quotient), "{dividend} / {divisor}");
    assert_eq!(result.remainder, big(remainder), "{dividend} % {divisor}");
}

fn u256() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256::from)
}

/// Restoring binary long division, one bit per step, built only from shifts,
/// comparison and subtraction.
fn shift_subtract_div(dividend: U256, divisor: U256) -> (U256, U256) {
    let mut quotient = U256::ZERO;
    let mut remainder = U256::ZERO;

    for bit in (0..256).rev() {
        let carry = remainder.leading_zeros() == 0;
        remainder = (remainder << 1) | ((dividend >> bit) & U256::ONE);

        if carry || remainder >= divisor {
            remainder = remainder - divisor;
            quotient = quotient | (U256::ONE << bit);
        }
    }

    (quotient, remainder)
}

#[test]
fn u256_constants() {
    assert_eq!(U256::MAX, U256::from([u64::MAX; 4]));
    assert_eq!(U256::MIN, U256::ZERO);
    assert_eq!(U256::TEN, U256::from(10u64));
    assert_eq!(U256::ONE, U256::from(U128::ONE));
}

#[test]
fn u256_mul_of_tens() {
    let ten = U256::new(U128::ZERO, U128::TEN);
    let hundred: U128 = "100".parse().unwrap();

    assert_eq!(ten * ten, U256::new(U128::ZERO, hundred));
}

#[test]
fn u256_add_and_sub_carry_borrow() {
    let sum = U256::new(U128::ZERO, U128::MAX) + U256::ONE;
    assert_eq!(sum, U256::new(U128::ONE, U128::ZERO));

    assert_eq!(sum - U256::ONE, U256::new(U128::ZERO, U128::MAX));
    assert_eq!(U256::MAX + U256::ONE, U256::MIN);
    assert_eq!(U256::MIN - U256::ONE, U256::MAX);

    assert_eq!(U256::MAX.overflowing_add(U256::ONE), (U256::ZERO, true));
    assert_eq!(U256::ZERO.overflowing_sub(U256::ONE), (U256::MAX, true));
    assert_eq!(sum.overflowing_sub(U256::ONE), (U256::new(U128::ZERO, U128::MAX), false));
}

#[test]
fn u256_mul_cross_limb_carry() {
    let hi128 = U256::from([0u64, 1, 0, 0]);
    let mid64 = U256::from([0u64, 0, 1, 0]);

    assert_eq!(hi128 * mid64, U256::from([1u64, 0, 0, 0]));

    let low = U256::from(U128::MAX);
    assert_eq!(low * low, U256::new(U128::MAX - U128::ONE, U128::ONE));
}

#[test]
fn u256_mul_truncates_to_256_bits() {
    assert_eq!(U256::MAX * U256::TWO, U256::from([u64::MAX, u64::MAX, u64::MAX, u64::MAX - 1]));
    assert_eq!(U256::MAX * U256::MAX, U256::ONE);
}

#[test]
fn u256_ordering_is_high_limb_first() {
    assert!(U256::new(U128::ONE, U128::ZERO) > U256::new(U128::ZERO, U128::MAX));
    assert!(U256::from(3u64) < U256::from(4u64));
}

#[test]
fn u256_div_single_limb_divisor() {
    let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    check_div(
        max,
        "10",
        "11579208923731619542357098500868790785326998466564056403945758400791312963993",
        "5",
    );
    check_div(
        "10000000000000000000000000000000000000000000000000000000000000000000000",
        "100000000000000000000000000000000001",
        "99999999999999999999999999999999999",
        "1",
    );

    let result = U256::MAX.div_mod(U256::from(U128::MAX)).unwrap();
    assert_eq!(result.quotient, U256::new(U128::ONE, U128::ONE));
    assert_eq!(result.remainder, U256::ZERO);
}

#[test]
fn u256_div_divisor_wider_than_half_limb() {
    let dividend = U256::from([1u64, 2, 3, 4]);
    let divisor = U256::from([0u64, 0, 1, 5]);

    let DivMod {
        quotient,
        remainder,
    } = dividend.div_mod(divisor).unwrap();

    assert_eq!(quotient, U256::from(U128::new(0xFFFF_FFFF_FFFF_FFFD, 0x11)));
    assert_eq!(remainder, U256::from(0xFFFF_FFFF_FFFF_FFAFu64));
}

#[test]
fn u256_div_two_limb_divisor() {
    check_div(
        "1000000000000000000000000000000000000000000000000000000000000000000000000000",
        "10000000000000000000000000000000000000007",
        "99999999999999999999999999999999999",
        "9999300000000000000000000000000000000007",
    );
    check_div(
        "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        "57896044618658097711785492504343953926634992332820282019728792003956564819971",
        "1",
        "57896044618658097711785492504343953926634992332820282019728792003956564819964",
    );

    assert_eq!(U256::MAX / U256::MAX, U256::ONE);
    assert_eq!(U256::MAX % (U256::MAX - U256::ONE), U256::ONE);
    assert_eq!(U256::ONE / U256::MAX, U256::ZERO);
}

#[test]
fn u256_div_matches_shift_subtract_at_limb_boundaries() {
    let dividends = [
        U256::MAX,
        U256::from([u64::MAX, 0, u64::MAX, 0]),
        U256::from([0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210, 0xDEAD_BEEF, 0xCAFE_BABE]),
        U256::ONE << 255,
    ];

    for bits in [31u32, 32, 33, 63, 64, 65, 127, 128, 129, 191, 192, 193, 255] {
        let edge = U256::ONE << bits;

        for divisor in [edge - U256::ONE, edge, edge + U256::ONE, U256::MAX >> (255 - bits)] {
            for dividend in dividends {
                let DivMod {
                    quotient,
                    remainder,
                } = dividend.div_mod(divisor).unwrap();

                assert_eq!(
                    (quotient, remainder),
                    shift_subtract_div(dividend, divisor),
                    "{dividend} / {divisor}"
                );
            }
        }
    }
}

#[test]
fn u256_div_by_zero_errors() {
    assert_eq!(U256::ONE.div_mod(U256::ZERO), Err(ArithmeticError::DivideByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn u256_div_operator_by_zero_panics() {
    let _ = U256::from(1u64) / U256::ZERO;
}

#[test]
fn u256_shifts_cross_limb_boundary() {
    let one = U256::ONE;

    assert_eq!(one << 0, one);
    assert_eq!(one << 64, U256::from([0u64, 0, 1, 0]));
    assert_eq!(one << 128, U256::new(U128::ONE, U128::ZERO));
    assert_eq!(one << 255, U256::from([1u64 << 63, 0, 0, 0]));
    assert_eq!((one << 255) >> 255, one);
    assert_eq!(U256::new(U128::ONE, U128::ZERO) >> 1, U256::from(U128::new(1 << 63, 0)));
    assert_eq!(U256::from([0xABu64, 0, 0, 0]) >> 192, U256::from(0xABu64));
}

#[test]
fn u256_full_width_shifts_clamp_to_zero() {
    assert_eq!(U256::MAX << 256, U256::ZERO);
    assert_eq!(U256::MAX >> 256, U256::ZERO);
    assert_eq!(U256::ONE << 1000, U256::ZERO);
}

#[test]
fn u256_bitwise_ops() {
    let a = U256::from([0xFFu64; 4]);
    let b = U256::from([0x0Fu64; 4]);

    assert_eq!(a & b, U256::from([0x0Fu64; 4]));
    assert_eq!(a | b, a);
    assert_eq!(a ^ b, U256::from([0xF0u64; 4]));
    assert_eq!(!U256::ZERO, U256::MAX);
}

#[test]
fn u256_leading_zeros() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ONE.leading_zeros(), 255);
    assert_eq!(U256::from([0u64, 1, 0, 0]).leading_zeros(), 127);
}

#[test]
fn u256_text() {
    let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    assert_eq!(U256::ZERO.to_string(), "0");
    assert_eq!(U256::MAX.to_string(), max);
    assert_eq!(big(max), U256::MAX);
    assert_eq!(U256::MAX.to_hex_string(), format!("0x{}", "F".repeat(64)));
    assert_eq!(U256::from(6u64).to_bin_string(), "0b110");
    assert_eq!(U256::from_hex_str("0x1F"), Ok(U256::from(31u64)));
    assert_eq!(
        "1x".parse::<U256>(),
        Err(ArithmeticError::InvalidDigit {
            position: 1,
            byte: b'x'
        })
    );
}

#[test]
fn u256_conversions() {
    let words = [1u64, 2, 3, 4];
    let value = U256::from(words);

    assert_eq!(<[u64; 4]>::from(value), words);
    assert_eq!(<[U128; 2]>::from(value), [U128::new(1, 2), U128::new(3, 4)]);
    assert_eq!(U256::from([U128::new(1, 2), U128::new(3, 4)]), value);

    assert_eq!(U128::try_from(U256::from(U128::MAX)), Ok(U128::MAX));
    assert!(U128::try_from(value).is_err());
    assert_eq!(u64::try_from(U256::from(9u64)), Ok(9));
    assert!(u64::try_from(U256::from(U128::new(1, 0))).is_err());
}

proptest! {
    #[test]
    fn u256_add_sub_inverse(x in u256(), y in u256()) {
        prop_assert_eq!((x + y) - y, x);
        prop_assert_eq!(x + y, y + x);
    }

    #[test]
    fn u256_mul_is_commutative_and_associative(x in u256(), y in u256(), z in u256()) {
        prop_assert_eq!(x * y, y * x);
        prop_assert_eq!((x * y) * z, x * (y * z));
        prop_assert_eq!(x * (y + z), x * y + x * z);
    }

    #[test]
    fn u256_mul_of_narrow_values_is_exact(x: u128, y: u128) {
        let (a, b) = (U256::from(U128::from(x)), U256::from(U128::from(y)));
        let product = a * b;

        prop_assert_eq!(u128::from(product.low()), x.wrapping_mul(y));
        if y != 0 {
            prop_assert_eq!(product / b, a);
            prop_assert_eq!(product % b, U256::ZERO);
        }
    }

    #[test]
    fn u256_division_lands_in_range(x in u256(), y in u256(), shift in 0u32..256) {
        let divisor = y >> shift;
        prop_assume!(!divisor.is_zero());

        let DivMod { quotient, remainder } = x.div_mod(divisor).unwrap();

        prop_assert!(remainder < divisor);
        prop_assert_eq!(quotient * divisor + remainder, x);
    }

    #[test]
    fn u256_division_matches_shift_subtract(x in u256(), y in u256(), shift in 0u32..256) {
        let divisor = y >> shift;
        prop_assume!(!divisor.is_zero());

        let DivMod { quotient, remainder } = x.div_mod(divisor).unwrap();

        prop_assert_eq!((quotient, remainder), shift_subtract_div(x, divisor));
    }

    #[test]
    fn u256_shift_round_trip_masks(x in u256(), amount in 0u32..256) {
        prop_assert_eq!((x << amount) >> amount, x & (U256::MAX >> amount));
        prop_assert_eq!((x >> amount) << amount, x & (U256::MAX << amount));
    }

    #[test]
    fn u256_text_round_trips(x in u256()) {
        prop_assert_eq!(x.to_string().parse::<U256>(), Ok(x));
        prop_assert_eq!(U256::from_hex_str(&x.to_hex_string()), Ok(x));
        prop_assert_eq!(U256::from_bin_str(&x.to_bin_string()), Ok(x));
    }

    #[test]
    fn u256_narrow_text_matches_native(x: u128) {
        let value = U256::from(U128::from(x));

        prop_assert_eq!(value.to_string(), x.to_string());
        prop_assert_eq!(value.to_hex_string(), format!("0x{x:X}"));
    }
}
