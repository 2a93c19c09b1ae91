//! Numeric label parsing
//!
//! A counter label's text has the shape `prefix + digits + suffix`, where
//! prefix and suffix may be empty and digits is the first contiguous run
//! of ASCII digits. Text without digits is not a counter label.

/// The pieces of a numeric label
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLabel {
    /// Text before the digit run (may be empty)
    pub prefix: String,
    /// The digit run parsed as the count-up target
    pub target: u32,
    /// Text after the digit run (may be empty)
    pub suffix: String,
}

/// Split a label into prefix, target, and suffix
///
/// Returns `None` when the text has no digits, or when the digit run
/// overflows `u32` (treated the same as digitless: the label is skipped).
pub fn parse_counter_label(text: &str) -> Option<ParsedLabel> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let run = &text[start..];
    let len = run
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(run.len());
    let target: u32 = run[..len].parse().ok()?;

    Some(ParsedLabel {
        prefix: text[..start].to_string(),
        target,
        suffix: text[start + len..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_no_suffix() {
        let parsed = parse_counter_label("Users: 120").unwrap();
        assert_eq!(parsed.prefix, "Users: ");
        assert_eq!(parsed.target, 120);
        assert_eq!(parsed.suffix, "");
    }

    #[test]
    fn test_suffix_and_no_prefix() {
        let parsed = parse_counter_label("99+ Projects").unwrap();
        assert_eq!(parsed.prefix, "");
        assert_eq!(parsed.target, 99);
        assert_eq!(parsed.suffix, "+ Projects");
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_counter_label("No Data"), None);
        assert_eq!(parse_counter_label(""), None);
    }

    #[test]
    fn test_only_first_run_is_parsed() {
        let parsed = parse_counter_label("10 of 25").unwrap();
        assert_eq!(parsed.prefix, "");
        assert_eq!(parsed.target, 10);
        assert_eq!(parsed.suffix, " of 25");
    }

    #[test]
    fn test_minus_lands_in_prefix() {
        let parsed = parse_counter_label("-42°C").unwrap();
        assert_eq!(parsed.prefix, "-");
        assert_eq!(parsed.target, 42);
        assert_eq!(parsed.suffix, "°C");
    }

    #[test]
    fn test_overflowing_run_is_skipped() {
        assert_eq!(parse_counter_label("99999999999999999999 stars"), None);
    }

    #[test]
    fn test_multibyte_neighbors() {
        let parsed = parse_counter_label("★ 7 étoiles").unwrap();
        assert_eq!(parsed.prefix, "★ ");
        assert_eq!(parsed.target, 7);
        assert_eq!(parsed.suffix, " étoiles");
    }
}
