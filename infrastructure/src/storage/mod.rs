//! Filesystem adapters for application ports.

pub mod conf_file;
