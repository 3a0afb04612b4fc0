//! Presentation layer for diceconf
//!
//! This crate contains the terminal console the operator types into.

pub mod console;

// Re-export commonly used types
pub use console::interactive::InteractiveConsole;
