//! Application layer for diceconf
//!
//! This crate contains the use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    config_store::{ConfigStore, ConfigStoreError},
    operator_console::{ConsoleError, OperatorConsole},
};
pub use use_cases::build_config::{BuildConfigError, BuildConfigOutput, BuildConfigUseCase};
