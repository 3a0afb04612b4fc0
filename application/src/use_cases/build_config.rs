//! Build Config use case
//!
//! Orchestrates one interactive session: collect a participant ID and a
//! sequence of rotations, then persist the configuration document.

use crate::ports::config_store::{ConfigStore, ConfigStoreError};
use crate::ports::operator_console::{ConsoleError, OperatorConsole};
use diceconf_domain::{ConfigDocument, ParticipantId, Rotation, RotationChoice};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building a configuration
#[derive(Error, Debug)]
pub enum BuildConfigError {
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),

    #[error("Store error: {0}")]
    Store(#[from] ConfigStoreError),
}

/// Result of a completed session
#[derive(Debug, Clone)]
pub struct BuildConfigOutput {
    /// Where the configuration was written.
    pub path: PathBuf,
    /// How many rotation entries the session recorded.
    pub rotations: usize,
}

/// Use case for building an experiment configuration interactively
pub struct BuildConfigUseCase<C: OperatorConsole, S: ConfigStore> {
    console: Arc<C>,
    store: Arc<S>,
}

impl<C: OperatorConsole, S: ConfigStore> BuildConfigUseCase<C, S> {
    pub fn new(console: Arc<C>, store: Arc<S>) -> Self {
        Self { console, store }
    }

    /// Run the session from banner to persisted file.
    ///
    /// Every answer is taken verbatim: participant IDs keep whatever
    /// characters survive whitespace stripping, and angles and vectors are
    /// recorded exactly as typed. Unrecognized menu answers are skipped
    /// without comment and the menu is asked again.
    pub fn execute(&self) -> Result<BuildConfigOutput, BuildConfigError> {
        self.console.show_banner()?;

        let raw_id = self.console.read_participant_id()?;
        let mut document = ConfigDocument::new(ParticipantId::new(raw_id));

        loop {
            let answer = self.console.read_rotation_choice()?;

            let Some(choice) = RotationChoice::parse(&answer) else {
                debug!("ignoring unrecognized menu input: {:?}", answer);
                continue;
            };

            match choice {
                RotationChoice::Axis(axis) => {
                    let angle = self.console.read_rotation_angle()?;
                    document.push_rotation(Rotation::about_axis(axis, angle));
                }
                RotationChoice::Vector => {
                    let vector = self.console.read_axis_vector()?;
                    let angle = self.console.read_rotation_angle()?;
                    document.push_rotation(Rotation::about_vector(vector, angle));
                }
                RotationChoice::Random => {
                    document.push_rotation(Rotation::Random);
                }
                RotationChoice::Quit => break,
            }
        }

        info!(
            "Session complete for participant '{}' with {} rotation(s)",
            document.participant(),
            document.rotation_count()
        );

        let path = self.store.persist(&document)?;

        Ok(BuildConfigOutput {
            path,
            rotations: document.rotation_count(),
        })
    }
}
