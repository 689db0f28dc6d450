//! Digit rendering and parsing shared by all integer types
//!
//! Every type renders the same way: digits are produced least significant
//! first, the radix marker and the sign are appended in reverse, and the
//! whole buffer is reversed at the end. Hex and binary output therefore
//! reads `-0x1F` / `0b101`, and zero renders as a single `0` digit.
//!
//! Parsing folds `acc = acc * base + digit` from the most significant digit,
//! wrapping silently like the rest of the arithmetic.

use crate::error::{ArithmeticError, Result};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Supported textual radices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Radix {
    Binary,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub(crate) const fn base(self) -> u64 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Bits per digit for the power-of-two radices.
    pub(crate) const fn digit_bits(self) -> Option<u32> {
        match self {
            Radix::Binary => Some(1),
            Radix::Decimal => None,
            Radix::Hexadecimal => Some(4),
        }
    }

    pub(crate) const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }

    fn digit_value(self, byte: u8) -> Option<u8> {
        let value = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => return None,
        };

        (u64::from(value) < self.base()).then_some(value)
    }
}

/// Digit-level access to an unsigned magnitude.
pub(crate) trait Digits: Copy {
    /// Width of the magnitude in bits, bounding the digit count.
    const BITS: u32;
    const ZERO: Self;

    fn is_zero(self) -> bool;

    /// Splits off the least significant digit: `(self / base, self % base)`.
    fn pop_digit(self, radix: Radix) -> (Self, u8);

    /// Appends a digit: `self * base + digit`, wrapping.
    fn push_digit(self, radix: Radix, digit: u8) -> Self;
}

/// Renders `magnitude` in `radix`, with a leading `-` when `negative`.
pub(crate) fn render<T: Digits>(magnitude: T, radix: Radix, negative: bool) -> String {
    // One digit per bit at most in binary, plus the marker and the sign.
    let capacity = T::BITS as usize + radix.prefix().len() + usize::from(negative);
    let mut buf = Vec::with_capacity(capacity);

    if magnitude.is_zero() {
        buf.push(b'0');
    }

    let mut rest = magnitude;
    while !rest.is_zero() {
        let (next, digit) = rest.pop_digit(radix);
        buf.push(DIGITS[usize::from(digit)]);
        rest = next;
    }

    buf.extend(radix.prefix().bytes().rev());
    if negative {
        buf.push(b'-');
    }

    buf.iter().rev().map(|&b| char::from(b)).collect()
}

/// Parses `input` in `radix`, returning the magnitude and whether a leading
/// `-` was present. The sign is only accepted when `signed` is set.
///
/// Hex and binary input must carry the `0x` / `0b` marker (either case)
/// after the optional sign. Empty digit strings parse to zero.
pub(crate) fn parse<T: Digits>(input: &str, radix: Radix, signed: bool) -> Result<(T, bool)> {
    let bytes = input.as_bytes();

    let negative = signed && bytes.first() == Some(&b'-');
    let mut position = usize::from(negative);

    let prefix = radix.prefix();
    if !prefix.is_empty() {
        let marker = bytes.get(position..position + prefix.len());
        if !marker.is_some_and(|m| m.eq_ignore_ascii_case(prefix.as_bytes())) {
            return Err(ArithmeticError::MissingRadixPrefix(prefix));
        }
        position += prefix.len();
    }

    let mut acc = T::ZERO;
    for (offset, &byte) in bytes[position..].iter().enumerate() {
        let digit = radix
            .digit_value(byte)
            .ok_or(ArithmeticError::InvalidDigit {
                position: position + offset,
                byte,
            })?;
        acc = acc.push_digit(radix, digit);
    }

    Ok((acc, negative))
}
