//! Operator console port
//!
//! Defines the interface for talking to the person building the
//! configuration: printing the banner and reading their answers.
//!
//! Answers come back exactly as typed (minus the line terminator). The use
//! case decides what they mean; the console never validates.

use thiserror::Error;

/// Errors that can occur while reading operator input
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The input stream ended before the session did (e.g. Ctrl+D).
    #[error("operator input stream closed")]
    Eof,

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Console for interacting with the operator
///
/// This port defines how the application layer prompts for and receives
/// input. The interactive adapter lives in the presentation layer; tests
/// use scripted implementations.
pub trait OperatorConsole: Send + Sync {
    /// Print the banner listing the rotation codes, once per session.
    fn show_banner(&self) -> Result<(), ConsoleError>;

    /// Ask for the participant ID.
    fn read_participant_id(&self) -> Result<String, ConsoleError>;

    /// Ask which rotation to add next (`x`, `y`, `z`, `v`, `r`, `q`).
    fn read_rotation_choice(&self) -> Result<String, ConsoleError>;

    /// Ask for a rotation angle.
    fn read_rotation_angle(&self) -> Result<String, ConsoleError>;

    /// Ask for a free-form rotation axis vector.
    fn read_axis_vector(&self) -> Result<String, ConsoleError>;
}
