/// Returns `true` if the given character separates the two ends of a range.
pub fn is_separator(ch: char) -> bool {
    matches!(ch, ':' | ',')
}

/// Split a token into start and end expressions, on the first run of separator characters.
///
/// Whitespace around the separator run is trimmed. Returns `None` if either side is empty, or if
/// a second separator follows the end expression; the caller then treats the whole token as a
/// single address.
pub fn split_range(token: &str) -> Option<(&str, &str)> {
    let start_len = token.find(is_separator)?;
    let (start, rest) = token.split_at(start_len);
    let end = rest.trim_start_matches(is_separator);

    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() || end.contains(is_separator) {
        return None;
    }
    Some((start, end))
}

#[cfg(test)]
mod tests {
    #[test]
    fn split_range() {
        fn expect_range(input: &str, expected: Option<(&str, &str)>) {
            println!("{:?}", input);
            assert_eq!(super::split_range(input), expected);
        }

        expect_range("", None);
        expect_range("$c000", None);
        expect_range(":", None);
        expect_range("$c000:", None);
        expect_range(":$c0ff", None);
        expect_range("  :$c0ff", None);
        expect_range("$c000:$c0ff:$c100", None);
        expect_range("$c000: ,$c0ff", None);

        expect_range("$c000:$c0ff", Some(("$c000", "$c0ff")));
        expect_range("$c000,$c0ff", Some(("$c000", "$c0ff")));
        expect_range("$c000::,$c0ff", Some(("$c000", "$c0ff")));
        expect_range("$c000 : $c0ff", Some(("$c000", "$c0ff")));
        expect_range("start+1,end - 2", Some(("start+1", "end - 2")));
    }
}
