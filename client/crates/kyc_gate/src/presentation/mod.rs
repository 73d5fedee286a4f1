//! Presentation Layer
//!
//! Content of the verification prompt. Visibility is owned by the gate.

pub mod prompt;
