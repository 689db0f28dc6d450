//! Text conversion for `U128`: decimal, hexadecimal and binary

use crate::error::{ArithmeticError, Result};
use crate::primitives::U128;
use crate::primitives::radix::{self, Digits, Radix};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

impl Digits for U128 {
    const BITS: u32 = U128::BITS;
    const ZERO: Self = U128::ZERO;

    fn is_zero(self) -> bool {
        U128::is_zero(self)
    }

    fn pop_digit(self, radix: Radix) -> (Self, u8) {
        match radix.digit_bits() {
            Some(bits) => (self >> bits, (self.low & (radix.base() - 1)) as u8),
            None => {
                let (quotient, remainder) = self.div_rem_nonzero(U128::from(radix.base()));
                (quotient, remainder.low as u8)
            }
        }
    }

    fn push_digit(self, radix: Radix, digit: u8) -> Self {
        self * U128::from(radix.base()) + U128::from(u64::from(digit))
    }
}

impl U128 {
    /// Renders the value as uppercase hexadecimal, e.g. `0x1F`.
    pub fn to_hex_string(self) -> String {
        radix::render(self, Radix::Hexadecimal, false)
    }

    /// Renders the value in binary, e.g. `0b101`.
    pub fn to_bin_string(self) -> String {
        radix::render(self, Radix::Binary, false)
    }

    /// Parses a `0x`-prefixed hexadecimal string. Digits are case-insensitive.
    pub fn from_hex_str(input: &str) -> Result<Self> {
        radix::parse(input, Radix::Hexadecimal, false).map(|(value, _)| value)
    }

    /// Parses a `0b`-prefixed binary string.
    pub fn from_bin_str(input: &str) -> Result<Self> {
        radix::parse(input, Radix::Binary, false).map(|(value, _)| value)
    }
}

/// Formats the value in decimal.
impl Display for U128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&radix::render(*self, Radix::Decimal, false))
    }
}

/// Parses a decimal digit string.
///
/// Every byte must be an ASCII digit. Values past `U128::MAX` wrap.
impl FromStr for U128 {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self> {
        radix::parse(s, Radix::Decimal, false).map(|(value, _)| value)
    }
}
