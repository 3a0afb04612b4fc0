//! Interactive session domain.
//!
//! - [`choice::RotationChoice`] — a recognized answer to the rotation menu

pub mod choice;
