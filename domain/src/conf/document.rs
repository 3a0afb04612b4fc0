//! The configuration document and its byte-exact rendering

use super::participant::ParticipantId;
use super::rotation::Rotation;

/// Fixed name of the generated configuration file.
pub const CONF_FILE_NAME: &str = "experiment.conf";

/// Everything one session writes to `experiment.conf` (Entity)
///
/// Rotations keep insertion order, and that order becomes file line order.
/// The document is rendered once, at the end of the session, and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    participant: ParticipantId,
    rotations: Vec<Rotation>,
}

impl ConfigDocument {
    /// Create an empty document for the given participant.
    pub fn new(participant: ParticipantId) -> Self {
        Self {
            participant,
            rotations: Vec::new(),
        }
    }

    /// Append a rotation; entries are written in insertion order.
    pub fn push_rotation(&mut self, rotation: Rotation) {
        self.rotations.push(rotation);
    }

    pub fn participant(&self) -> &ParticipantId {
        &self.participant
    }

    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Render the complete file content.
    ///
    /// `generated_at` is the preformatted local timestamp for the header
    /// line; the caller owns the clock. Line order, blank-line placement,
    /// and the trailing space after the participant comment are all part of
    /// the format the dice game consumes. Do not normalize.
    pub fn render(&self, generated_at: &str) -> String {
        let mut out = String::new();

        out.push_str("# Configuration file generated using generateConfFile.py\n");
        out.push_str(&format!("# Date: {}\n\n\n", generated_at));

        out.push_str("# Participant ID: \n");
        out.push_str(&format!("ID {}\n\n\n", self.participant.as_str()));

        out.push_str("# Rotations:\n");
        for rotation in &self.rotations {
            out.push_str(&rotation.conf_line());
            out.push('\n');
        }
        out.push('\n');

        out
    }
}
