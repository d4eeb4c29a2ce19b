use super::integer::{take_sign, Sign};

/// Label-relative address, before label and offset are resolved.
///
/// Written as `<label> <sign> <offset>`, with optional whitespace around the sign.
#[derive(Debug, PartialEq)]
pub struct Arithmetic<'a> {
    pub label: &'a str,
    pub sign: Sign,
    /// Prefixed literal, exact label, or bare numeral. Never nested arithmetic.
    pub offset: &'a str,
}

/// Returns `true` if the given character can not appear anywhere in an arithmetic label.
///
/// Labels containing these characters can still be matched exactly, but not used as the base of
/// arithmetic.
pub fn is_delimiter(ch: char) -> bool {
    matches!(ch, '+' | '-') || ch.is_whitespace()
}

/// Returns `true` if the given character can appear in an offset, after its optional prefix.
fn can_contain_offset(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Split a token on the first sign character.
///
/// The label is everything before the first `+` or `-`, and must not be empty or contain
/// whitespace (other than whitespace directly before the sign). Only the shape of the offset is
/// checked here; it is resolved by the caller.
pub fn split_arithmetic(token: &str) -> Option<Arithmetic<'_>> {
    let sign_index = token.find(|ch: char| matches!(ch, '+' | '-'))?;
    let (label, rest) = token.split_at(sign_index);

    let label = label.trim_end();
    if label.is_empty() || label.contains(is_delimiter) {
        return None;
    }

    let mut chars = rest.chars().peekable();
    let sign = take_sign(&mut chars)?;
    let offset = rest[1..].trim_start();

    // Single optional prefix, then at least one digit-like character
    let digits = offset
        .strip_prefix(|ch: char| matches!(ch, '$' | '+' | '%'))
        .unwrap_or(offset);
    if digits.is_empty() || !digits.chars().all(can_contain_offset) {
        return None;
    }

    Some(Arithmetic {
        label,
        sign,
        offset,
    })
}
