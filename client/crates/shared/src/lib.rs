//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of client vocabulary:
//! - Common error types and result aliases
//! - Error classification shared by every component crate
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all components.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
