//! Domain layer for diceconf
//!
//! This crate contains the configuration document model and its rendering.
//! It has no dependencies on infrastructure or presentation concerns: no
//! clock, no filesystem, no terminal.
//!
//! # Core Concepts
//!
//! ## Configuration document
//!
//! One interactive session produces one [`ConfigDocument`]: a participant
//! identifier plus an ordered list of rotations, rendered as the
//! line-oriented `experiment.conf` format the dice game consumes.
//!
//! ## Rotations
//!
//! A [`Rotation`] is either a fixed axis/angle pair (principal axis or free
//! direction vector) or the `RANDOM` sentinel that tells the consumer to
//! pick its own parameters. Angle and vector text stay verbatim operator
//! input all the way to the file.

pub mod conf;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use conf::{
    document::{CONF_FILE_NAME, ConfigDocument},
    participant::ParticipantId,
    rotation::{Axis, Rotation},
};
pub use session::choice::RotationChoice;
