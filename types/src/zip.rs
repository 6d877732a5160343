//! The `"SS NNNNN"` ZIP string codec.
//!
//! The wire shape is exactly two uppercase ASCII letters, one ASCII space,
//! five decimal digits: total length 8, nothing before or after. Everything
//! the generator emits and the classifier accepts passes through here.

/// A parsed view into a valid ZIP string.
///
/// Borrowed and transient; it lives for the duration of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedZip<'a> {
    /// Two uppercase letters, e.g. `"WA"`. Any state, hot or not.
    pub state: &'a str,
    /// Five decimal digits, leading zeros preserved.
    pub digits: &'a str,
    /// Numeric value of `digits`, in `0..=99999`.
    pub n: u32,
}

/// Returns true iff `s` is exactly `"SS NNNNN"`.
#[must_use]
pub fn is_valid_format(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 8
        && b[0].is_ascii_uppercase()
        && b[1].is_ascii_uppercase()
        && b[2] == b' '
        && b[3..].iter().all(u8::is_ascii_digit)
}

/// Splits a ZIP string into its parts; `None` when the shape is off.
#[must_use]
pub fn parse(s: &str) -> Option<ParsedZip<'_>> {
    if !is_valid_format(s) {
        return None;
    }
    let digits = &s[3..];
    let n = digits.parse().ok()?;
    Some(ParsedZip {
        state: &s[..2],
        digits,
        n,
    })
}

/// Renders a state code and number as a ZIP string, zero-padding the number
/// to five digits.
///
/// `n` must stay in `0..=99999`; anything wider is a caller bug.
#[must_use]
pub fn format(state: &str, n: u32) -> String {
    debug_assert!(n <= 99_999, "zip number out of range: {n}");
    format!("{state} {n:05}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_exact_shape() {
        assert!(is_valid_format("WA 98666"));
        assert!(is_valid_format("OR 97000"));
        assert!(is_valid_format("AA 00000"));
        assert!(is_valid_format("ZZ 99999"));
    }

    #[test]
    fn rejects_wrong_spacing_casing_or_digits() {
        assert!(!is_valid_format("WA98666"));
        assert!(!is_valid_format("WA 9866"));
        assert!(!is_valid_format("WA 986660"));
        assert!(!is_valid_format("wa 98666"));
        assert!(!is_valid_format("WAA 98666"));
        assert!(!is_valid_format("WA 98A66"));
        assert!(!is_valid_format("WA 98666 "));
        assert!(!is_valid_format(" WA 98666"));
        assert!(!is_valid_format("WA  9866"));
        assert!(!is_valid_format(""));
    }

    #[test]
    fn rejects_non_ascii_lookalikes() {
        // Multi-byte letters must not sneak past the byte checks.
        assert!(!is_valid_format("É 98666"));
        assert!(!is_valid_format("WΑ 9866"));
    }

    #[test]
    fn parse_splits_a_valid_zip() {
        let zip = parse("WA 98666").unwrap();
        assert_eq!(zip.state, "WA");
        assert_eq!(zip.digits, "98666");
        assert_eq!(zip.n, 98_666);
    }

    #[test]
    fn parse_keeps_leading_zeros_in_digits_but_not_in_n() {
        let zip = parse("NY 00501").unwrap();
        assert_eq!(zip.digits, "00501");
        assert_eq!(zip.n, 501);
    }

    #[test]
    fn parse_rejects_what_validation_rejects() {
        assert_eq!(parse("WA98666"), None);
        assert_eq!(parse("WA 9866"), None);
        assert_eq!(parse("wa 98666"), None);
    }

    #[test]
    fn format_zero_pads() {
        assert_eq!(format("WA", 98_666), "WA 98666");
        assert_eq!(format("OR", 42), "OR 00042");
        assert_eq!(format("NY", 501), "NY 00501");
    }

    #[test]
    fn format_then_parse_round_trips() {
        for s in ["WA 98666", "NY 00501", "TX 73301", "AA 00000", "ZZ 99999"] {
            let zip = parse(s).unwrap();
            assert_eq!(format(zip.state, zip.n), s);
        }
    }
}
