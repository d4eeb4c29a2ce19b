use std::fmt;
use std::str::FromStr;

/// Internal type of a parsed numeral, before being clamped into the address space.
///
/// Larger than `u16` in both directions, so out-of-range literals and arithmetic results can be
/// clamped instead of wrapping.
pub type IntegerValue = i64;

pub type CharIter<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// Radix (base) used to read a numeral.
///
/// Any base from 2 to 36 is accepted, with digits `0-9` followed by `a-z` (either case).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Radix(u32);

/// Value of sign character.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sign {
    Positive = 1,
    Negative = -1,
}

impl Radix {
    pub const BINARY: Self = Self(2);
    pub const DECIMAL: Self = Self(10);
    pub const HEX: Self = Self(16);

    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    /// Returns `None` if `base` is outside `2..=36`.
    pub const fn new(base: u32) -> Option<Self> {
        if base < Self::MIN || base > Self::MAX {
            return None;
        }
        Some(Self(base))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parse a single digit in this radix.
    pub fn parse_digit(self, ch: char) -> Option<u8> {
        ch.to_digit(self.0).map(|digit| digit as u8)
    }

    /// Radix selected by a literal prefix character: `$` hex, `+` decimal, `%` binary.
    pub fn from_prefix(ch: char) -> Option<Self> {
        match ch {
            '$' => Some(Self::HEX),
            '+' => Some(Self::DECIMAL),
            '%' => Some(Self::BINARY),
            _ => None,
        }
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::HEX
    }
}

impl TryFrom<u32> for Radix {
    type Error = String;
    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Self::new(base).ok_or_else(|| {
            format!(
                "Radix {} is not supported (expected {} to {})",
                base,
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl FromStr for Radix {
    type Err = String;
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let base: u32 = string
            .trim()
            .parse()
            .map_err(|_| format!("Invalid radix '{}'", string))?;
        Self::try_from(base)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sign {
    /// Apply sign as an operator: `base + offset` or `base - offset`.
    pub fn apply(self, base: IntegerValue, offset: IntegerValue) -> IntegerValue {
        match self {
            Self::Positive => base.saturating_add(offset),
            Self::Negative => base.saturating_sub(offset),
        }
    }
}

/// Split a literal prefix (`$`, `+`, `%`) from the start of a token.
///
/// Returns the radix selected by the prefix and the rest of the token, which may be empty or
/// otherwise malformed.
pub fn split_prefix(token: &str) -> Option<(Radix, &str)> {
    let mut chars = token.chars();
    let radix = Radix::from_prefix(chars.next()?)?;
    Some((radix, chars.as_str()))
}

/// Parse a numeral in the given radix.
///
/// Accepts surrounding whitespace and a single optional sign character before the digits.
/// Values too large for [`IntegerValue`] saturate, as they are clamped by the caller anyway.
///
/// Returns `None` for an empty numeral, or any character which is not a digit of `radix`.
pub fn parse_numeral(string: &str, radix: Radix) -> Option<IntegerValue> {
    let mut chars: CharIter = string.trim().chars().peekable();

    let sign = take_sign(&mut chars);

    // Otherwise loop would be skipped and value assumed to be `0`
    chars.peek()?;

    let base = IntegerValue::from(radix.get());
    let mut integer: IntegerValue = 0;
    for ch in chars {
        let digit = radix.parse_digit(ch)?;
        integer = integer
            .saturating_mul(base)
            .saturating_add(IntegerValue::from(digit));
    }

    if sign == Some(Sign::Negative) {
        integer = -integer;
    }
    Some(integer)
}

/// Clamp any integer into the 16-bit address space.
pub fn clamp_address(value: IntegerValue) -> u16 {
    value.clamp(0, IntegerValue::from(u16::MAX)) as u16
}

/// If next character is `+` or `-`, then consume character and return corresponding [`Sign`].
pub fn take_sign(chars: &mut CharIter) -> Option<Sign> {
    let sign = match chars.peek() {
        Some('+') => Sign::Positive,
        Some('-') => Sign::Negative,
        _ => return None,
    };
    chars.next();
    Some(sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_sign() {
        fn expect_sign(input: &str, expected_rest: &str, expected_result: Option<Sign>) {
            println!("{:?}", input);
            let mut chars = input.chars().peekable();
            let result = super::take_sign(&mut chars);
            assert_eq!(result, expected_result);
            assert!(chars.eq(expected_rest.chars()));
        }

        expect_sign("", "", None);
        expect_sign("123", "123", None);
        expect_sign("-", "", Some(Sign::Negative));
        expect_sign("+-", "-", Some(Sign::Positive));
        expect_sign("-123", "123", Some(Sign::Negative));
        expect_sign("+123", "123", Some(Sign::Positive));
    }

    #[test]
    fn radix_bounds() {
        assert_eq!(Radix::new(1), None);
        assert_eq!(Radix::new(2), Some(Radix::BINARY));
        assert_eq!(Radix::new(36).map(Radix::get), Some(36));
        assert_eq!(Radix::new(37), None);

        assert_eq!("16".parse::<Radix>(), Ok(Radix::HEX));
        assert_eq!(" 10 ".parse::<Radix>(), Ok(Radix::DECIMAL));
        assert!("0".parse::<Radix>().is_err());
        assert!("hex".parse::<Radix>().is_err());
        assert!("-2".parse::<Radix>().is_err());

        assert_eq!(Radix::default(), Radix::HEX);
        assert_eq!(Radix::HEX.to_string(), "16");
    }

    #[test]
    fn split_prefix() {
        assert_eq!(super::split_prefix("$c000"), Some((Radix::HEX, "c000")));
        assert_eq!(super::split_prefix("+100"), Some((Radix::DECIMAL, "100")));
        assert_eq!(super::split_prefix("%1010"), Some((Radix::BINARY, "1010")));
        assert_eq!(super::split_prefix("$"), Some((Radix::HEX, "")));
        assert_eq!(super::split_prefix("c000"), None);
        assert_eq!(super::split_prefix("-5"), None);
        assert_eq!(super::split_prefix(""), None);
    }

    #[test]
    fn parse_numeral() {
        fn expect_numeral(input: &str, radix: u32, expected: Option<IntegerValue>) {
            println!("{:?}", input);
            let radix = Radix::new(radix).unwrap();
            assert_eq!(super::parse_numeral(input, radix), expected);
        }

        // Not numerals
        expect_numeral("", 16, None);
        expect_numeral("   ", 16, None);
        expect_numeral("-", 16, None);
        expect_numeral("+", 10, None);
        expect_numeral("g", 16, None);
        expect_numeral("c0 00", 16, None);
        expect_numeral("2", 2, None);
        expect_numeral("9", 8, None);
        expect_numeral("--4", 10, None);
        expect_numeral("+-4", 10, None);
        expect_numeral("- 4", 10, None);
        expect_numeral("0x10", 16, None);
        expect_numeral("0b10", 10, None);
        expect_numeral("1_000", 10, None);
        // Hex
        expect_numeral("0", 16, Some(0));
        expect_numeral("c000", 16, Some(0xc000));
        expect_numeral("C0FF", 16, Some(0xc0ff));
        expect_numeral("00ff", 16, Some(0xff));
        expect_numeral("10000", 16, Some(0x10000));
        expect_numeral("-10", 16, Some(-0x10));
        expect_numeral(" ff ", 16, Some(0xff));
        // Decimal
        expect_numeral("100", 10, Some(100));
        expect_numeral("+100", 10, Some(100));
        expect_numeral("-100", 10, Some(-100));
        expect_numeral("65536", 10, Some(65536));
        // Binary
        expect_numeral("1010", 2, Some(0b1010));
        expect_numeral("0001", 2, Some(1));
        // Other bases
        expect_numeral("17", 8, Some(0o17));
        expect_numeral("zz", 36, Some(35 * 36 + 35));
        // Saturates instead of overflowing
        expect_numeral("ffffffffffffffffffff", 16, Some(IntegerValue::MAX));
        expect_numeral("-ffffffffffffffffffff", 16, Some(-IntegerValue::MAX));
    }

    #[test]
    fn clamp_address() {
        assert_eq!(super::clamp_address(-1), 0);
        assert_eq!(super::clamp_address(0), 0);
        assert_eq!(super::clamp_address(0xc000), 0xc000);
        assert_eq!(super::clamp_address(0xffff), 0xffff);
        assert_eq!(super::clamp_address(0x10000), 0xffff);
        assert_eq!(super::clamp_address(IntegerValue::MIN), 0);
    }

    #[test]
    fn sign_apply() {
        assert_eq!(Sign::Positive.apply(65530, 0x10), 65546);
        assert_eq!(Sign::Negative.apply(5, 10), -5);
        assert_eq!(Sign::Positive.apply(IntegerValue::MAX, 1), IntegerValue::MAX);
    }
}
