//! String utilities for the domain layer.

/// Remove every whitespace character from a string.
///
/// Interior whitespace goes too, not just the ends: a participant ID must
/// serialize as a single token on the `ID` line of the configuration file.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_interior_spaces() {
        assert_eq!(strip_whitespace("john doe"), "johndoe");
        assert_eq!(strip_whitespace("  a b  c "), "abc");
    }

    #[test]
    fn test_strip_tabs_and_newlines() {
        assert_eq!(strip_whitespace("a\tb\r\nc"), "abc");
    }

    #[test]
    fn test_empty_and_all_whitespace() {
        assert_eq!(strip_whitespace(""), "");
        assert_eq!(strip_whitespace(" \t "), "");
    }

    #[test]
    fn test_non_whitespace_untouched() {
        assert_eq!(strip_whitespace("müller-42"), "müller-42");
    }
}
