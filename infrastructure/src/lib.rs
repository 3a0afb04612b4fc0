//! Infrastructure layer for diceconf
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer.

pub mod storage;

// Re-export commonly used types
pub use storage::conf_file::FsConfigStore;
