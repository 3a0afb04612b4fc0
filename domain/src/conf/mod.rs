//! Configuration document subdomain.
//!
//! - [`participant::ParticipantId`] — normalized participant identifier
//! - [`rotation::Rotation`] — one rotation instruction for the dice game
//! - [`document::ConfigDocument`] — the complete `experiment.conf` content

pub mod document;
pub mod participant;
pub mod rotation;
