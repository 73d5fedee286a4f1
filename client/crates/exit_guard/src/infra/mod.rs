//! Infrastructure Layer

pub mod log_notifier;
