//! Text conversion for `I128`
//!
//! Values render as their magnitude with a leading `-` when negative, so
//! `-31` renders as `-0x1F` in hex rather than as a two's-complement bit
//! pattern. Parsers accept the same forms.

use crate::error::{ArithmeticError, Result};
use crate::primitives::radix::{self, Radix};
use crate::primitives::{I128, U128};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

impl I128 {
    fn render(self, base: Radix) -> String {
        radix::render(self.unsigned_abs(), base, self.is_negative())
    }

    fn parse(input: &str, base: Radix) -> Result<Self> {
        let (magnitude, negative) = radix::parse::<U128>(input, base, true)?;
        let value = I128::from_bits(magnitude);

        Ok(if negative { -value } else { value })
    }

    /// Renders the value as signed uppercase hexadecimal, e.g. `-0x1F`.
    pub fn to_hex_string(self) -> String {
        self.render(Radix::Hexadecimal)
    }

    /// Renders the value as signed binary, e.g. `-0b101`.
    pub fn to_bin_string(self) -> String {
        self.render(Radix::Binary)
    }

    /// Parses an optionally signed, `0x`-prefixed hexadecimal string.
    pub fn from_hex_str(input: &str) -> Result<Self> {
        Self::parse(input, Radix::Hexadecimal)
    }

    /// Parses an optionally signed, `0b`-prefixed binary string.
    pub fn from_bin_str(input: &str) -> Result<Self> {
        Self::parse(input, Radix::Binary)
    }
}

impl Display for I128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Radix::Decimal))
    }
}

/// Parses a decimal string with an optional leading `-`.
///
/// Magnitudes past 2¹²⁸ wrap before the sign is applied.
impl FromStr for I128 {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, Radix::Decimal)
    }
}
