//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the client:
//! - Key-value persistence (in-memory and JSON-file backed)
//! - Back-navigation signal hub with scoped subscriptions
//! - One-shot timer scheduling on the tokio runtime
//! - Process termination port
//! - Dialog model handed to the UI surface
//! - Environment configuration helpers

pub mod config;
pub mod dialog;
pub mod process;
pub mod signal;
pub mod store;
pub mod timer;
