//! Menu answers recognized by the rotation loop

use crate::conf::rotation::Axis;

/// A recognized answer to the `(x, y, z, v, r, q)` menu (Value Object)
///
/// Parsing is an exact, case-sensitive match on the whole answer. Anything
/// else (`"X"`, `"z2"`, `" x"`, `""`) is not a choice and the loop asks
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationChoice {
    /// Rotate about a principal axis; the angle is asked next.
    Axis(Axis),
    /// Rotate about a free-form vector; vector and angle are asked next.
    Vector,
    /// Let the experiment pick a rotation at run time.
    Random,
    /// End the session and write the file.
    Quit,
}

impl RotationChoice {
    /// Parse one menu answer; `None` means the answer is not recognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "x" => Some(Self::Axis(Axis::X)),
            "y" => Some(Self::Axis(Axis::Y)),
            "z" => Some(Self::Axis(Axis::Z)),
            "v" => Some(Self::Vector),
            "r" => Some(Self::Random),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// The single-letter code this choice is entered as.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Axis(Axis::X) => "x",
            Self::Axis(Axis::Y) => "y",
            Self::Axis(Axis::Z) => "z",
            Self::Vector => "v",
            Self::Random => "r",
            Self::Quit => "q",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognizes_all_codes() {
        assert_eq!(RotationChoice::parse("x"), Some(RotationChoice::Axis(Axis::X)));
        assert_eq!(RotationChoice::parse("y"), Some(RotationChoice::Axis(Axis::Y)));
        assert_eq!(RotationChoice::parse("z"), Some(RotationChoice::Axis(Axis::Z)));
        assert_eq!(RotationChoice::parse("v"), Some(RotationChoice::Vector));
        assert_eq!(RotationChoice::parse("r"), Some(RotationChoice::Random));
        assert_eq!(RotationChoice::parse("q"), Some(RotationChoice::Quit));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(RotationChoice::parse("X"), None);
        assert_eq!(RotationChoice::parse("Q"), None);
    }

    #[test]
    fn test_parse_rejects_near_misses() {
        assert_eq!(RotationChoice::parse("z2"), None);
        assert_eq!(RotationChoice::parse(" x"), None);
        assert_eq!(RotationChoice::parse("x "), None);
        assert_eq!(RotationChoice::parse(""), None);
    }

    #[test]
    fn test_code_round_trips() {
        for code in ["x", "y", "z", "v", "r", "q"] {
            let choice = RotationChoice::parse(code).unwrap();
            assert_eq!(choice.code(), code);
        }
    }
}
