//! Presentation Layer
//!
//! What the guard shows and the port it shows it through.

pub mod notice;
pub mod notifier;
