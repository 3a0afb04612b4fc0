//! Core domain concepts shared across all subdomains.
//!
//! - [`string::strip_whitespace`] — participant-ID normalization

pub mod string;
