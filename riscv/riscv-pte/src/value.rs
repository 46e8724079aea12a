use alloc::string::String;
use core::fmt;
use log::trace;

/// Numeric base of a literal, selected by its prefix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Radix {
    /// `0b` prefix.
    Binary,
    /// No prefix.
    Decimal,
    /// `0x` prefix.
    Hexadecimal,
}

impl Radix {
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Splits a literal into its radix and the digits following the prefix.
    ///
    /// Prefixes are lowercase only; `0X10` is read as a (malformed) decimal.
    #[must_use]
    pub fn split(literal: &str) -> (Self, &str) {
        if let Some(digits) = literal.strip_prefix("0x") {
            (Self::Hexadecimal, digits)
        } else if let Some(digits) = literal.strip_prefix("0b") {
            (Self::Binary, digits)
        } else {
            (Self::Decimal, literal)
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base {}", self.base())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseValueErrorKind {
    /// A character outside the digit set of the radix.
    #[error("expected {0} digits")]
    InvalidDigit(Radix),
    #[error("does not fit in 64 bits")]
    Overflow,
}

/// A numeric literal that could not be parsed in full.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value: {input} ({kind})")]
pub struct ParseValueError {
    input: String,
    kind: ParseValueErrorKind,
}

impl ParseValueError {
    fn new(input: &str, kind: ParseValueErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// The literal as it was given.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn kind(&self) -> ParseValueErrorKind {
        self.kind
    }
}

/// Parses a `0x` hexadecimal, `0b` binary or plain decimal literal.
///
/// The whole string must be consumed: no whitespace, signs or separators.
/// An empty digit run (`""`, `"0x"`, `"0b"`) reads as zero.
///
/// ```rust
/// # use riscv_pte::parse_value;
/// assert_eq!(parse_value("0x10"), Ok(16));
/// assert_eq!(parse_value("0b10"), Ok(2));
/// assert_eq!(parse_value("10"), Ok(10));
/// assert!(parse_value("0xZZ").is_err());
/// ```
///
/// # Errors
/// Returns [`ParseValueError`] naming `literal` if it contains a character that
/// is not a digit of the detected radix, or if the value exceeds `u64::MAX`.
pub fn parse_value(literal: &str) -> Result<u64, ParseValueError> {
    let (radix, digits) = Radix::split(literal);
    trace!("parsing {literal:?} as {radix}");

    if !digits.chars().all(|c| c.is_digit(radix.base())) {
        return Err(ParseValueError::new(
            literal,
            ParseValueErrorKind::InvalidDigit(radix),
        ));
    }

    if digits.is_empty() {
        return Ok(0);
    }

    // digits are validated, so only overflow is left
    u64::from_str_radix(digits, radix.base())
        .map_err(|_| ParseValueError::new(literal, ParseValueErrorKind::Overflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_radix_from_prefix() {
        assert_eq!(parse_value("0x10"), Ok(16));
        assert_eq!(parse_value("0b10"), Ok(2));
        assert_eq!(parse_value("10"), Ok(10));
        assert_eq!(parse_value("0x80000000"), Ok(0x8000_0000));
        assert_eq!(parse_value("0xdeadBEEF"), Ok(0xDEAD_BEEF));
        assert_eq!(parse_value("0"), Ok(0));
        assert_eq!(parse_value("007"), Ok(7));
    }

    #[test]
    fn accepts_full_u64_range() {
        assert_eq!(parse_value("0xffffffffffffffff"), Ok(u64::MAX));
        assert_eq!(parse_value("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn rejects_trailing_garbage() {
        for bad in ["0xZZ", "0xGG", "12a", "0b102", "0x10 ", " 10", "+5", "-1", "1_000"] {
            let err = parse_value(bad).unwrap_err();
            assert_eq!(err.input(), bad);
            assert!(matches!(err.kind(), ParseValueErrorKind::InvalidDigit(_)), "{bad:?}");
        }
    }

    #[test]
    fn missing_digits_read_as_zero() {
        for empty in ["", "0x", "0b"] {
            assert_eq!(parse_value(empty), Ok(0), "{empty:?}");
        }
        // a bare prefix still needs valid digits after it
        assert!(parse_value("0x ").is_err());
    }

    #[test]
    fn uppercase_prefix_is_not_a_prefix() {
        let err = parse_value("0X10").unwrap_err();
        assert_eq!(err.kind(), ParseValueErrorKind::InvalidDigit(Radix::Decimal));
    }

    #[test]
    fn rejects_overflow() {
        let err = parse_value("0x10000000000000000").unwrap_err();
        assert_eq!(err.kind(), ParseValueErrorKind::Overflow);
        assert_eq!(err.to_string(), "invalid value: 0x10000000000000000 (does not fit in 64 bits)");
    }

    #[test]
    fn message_names_input() {
        let err = parse_value("0xZZ").unwrap_err();
        assert_eq!(err.to_string(), "invalid value: 0xZZ (expected base 16 digits)");
    }
}
