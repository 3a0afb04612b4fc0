//! Filesystem writer for configuration documents.
//!
//! Renders a [`ConfigDocument`] with a local-time header and writes it in
//! one shot. Writing truncates: a second session replaces the file, it
//! never appends.

use diceconf_application::ports::config_store::{ConfigStore, ConfigStoreError};
use diceconf_domain::ConfigDocument;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Header timestamp layout, microsecond precision.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Config store that writes the rendered document to a fixed path.
pub struct FsConfigStore {
    path: PathBuf,
}

impl FsConfigStore {
    /// Create a store writing to the given path.
    ///
    /// Relative paths resolve against the process working directory at
    /// write time.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path the store writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FsConfigStore {
    fn persist(&self, document: &ConfigDocument) -> Result<PathBuf, ConfigStoreError> {
        let generated_at = chrono::Local::now().format(DATE_FORMAT).to_string();
        let content = document.render(&generated_at);

        debug!(
            "Writing {} byte(s) to {}",
            content.len(),
            self.path.display()
        );

        std::fs::write(&self.path, content).map_err(|source| ConfigStoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diceconf_domain::{Axis, ParticipantId, Rotation};

    fn sample_document() -> ConfigDocument {
        let mut document = ConfigDocument::new(ParticipantId::new("p1"));
        document.push_rotation(Rotation::about_axis(Axis::X, "90"));
        document.push_rotation(Rotation::Random);
        document
    }

    #[test]
    fn test_persist_writes_rendered_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("experiment.conf");
        let store = FsConfigStore::new(&path);

        let written = store.persist(&sample_document()).unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.split('\n').collect();

        assert_eq!(
            lines[0],
            "# Configuration file generated using generateConfFile.py"
        );
        assert!(lines[1].starts_with("# Date: "));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "# Participant ID: ");
        assert_eq!(lines[5], "ID p1");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "# Rotations:");
        assert_eq!(lines[9], "ROT 1 0 0 90 DEG");
        assert_eq!(lines[10], "ROT RANDOM");
        assert_eq!(lines[11], "");
        assert_eq!(lines[12], "");
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn test_persist_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("experiment.conf");
        let store = FsConfigStore::new(&path);

        store.persist(&sample_document()).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        let mut second_doc = ConfigDocument::new(ParticipantId::new("p2"));
        second_doc.push_rotation(Rotation::about_axis(Axis::Y, "15"));
        store.persist(&second_doc).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert!(first.contains("ID p1"));
        assert!(!second.contains("ID p1"));
        assert!(second.contains("ID p2"));
        assert!(second.contains("ROT 0 1 0 15 DEG"));
        // Replaced, not appended
        assert_eq!(second.matches("# Date: ").count(), 1);
    }

    #[test]
    fn test_persist_header_date_matches_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("experiment.conf");
        let store = FsConfigStore::new(&path);

        store.persist(&sample_document()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        let date_line = content
            .lines()
            .find(|l| l.starts_with("# Date: "))
            .unwrap();
        let stamp = date_line.trim_start_matches("# Date: ");
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_persist_error_carries_path() {
        let store = FsConfigStore::new("/nonexistent/deeply/nested/experiment.conf");

        let err = store.persist(&sample_document()).unwrap_err();
        let ConfigStoreError::Write { path, .. } = err;
        assert_eq!(path, PathBuf::from("/nonexistent/deeply/nested/experiment.conf"));
    }
}
