//! Participant identifier value object

use crate::core::string::strip_whitespace;

/// Identifier of the experiment participant (Value Object)
///
/// Construction removes every whitespace character so the identifier always
/// serializes as a single token on the `ID` line. No other constraint is
/// enforced; the empty string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create a participant ID, stripping all whitespace from the input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(strip_whitespace(&raw.into()))
    }

    /// The normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        ParticipantId::new(s)
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        ParticipantId::new(s)
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
