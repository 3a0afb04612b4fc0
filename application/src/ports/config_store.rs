//! Configuration store port
//!
//! Defines the interface for persisting a finished [`ConfigDocument`].

use std::path::PathBuf;

use diceconf_domain::ConfigDocument;
use thiserror::Error;

/// Errors that can occur while persisting a configuration
#[derive(Error, Debug)]
pub enum ConfigStoreError {
    #[error("could not write configuration file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Store for finished configuration documents
///
/// Persisting replaces any previous configuration at the same location;
/// sessions never append to an earlier file. The filesystem adapter lives
/// in the infrastructure layer.
pub trait ConfigStore: Send + Sync {
    /// Write the document, returning the path it landed at.
    fn persist(&self, document: &ConfigDocument) -> Result<PathBuf, ConfigStoreError>;
}
