//! Infrastructure Layer
//!
//! Repository implementations.

pub mod kv_profile;
