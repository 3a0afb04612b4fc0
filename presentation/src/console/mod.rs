//! Terminal console adapters.

pub mod interactive;
