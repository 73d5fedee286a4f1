//! Environment configuration helpers
//!
//! Component configs start from their `Default` values and let selected
//! fields be overridden from the process environment.

use std::env;
use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};

/// Read an environment variable, treating unset and blank values alike
pub fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a string override, falling back to `default`
pub fn env_string(key: &str, default: &str) -> String {
    env_var(key).unwrap_or_else(|| default.to_string())
}

/// Read a millisecond duration override, falling back to `default`
pub fn env_duration_ms(key: &str, default: Duration) -> AppResult<Duration> {
    parse_duration_ms(key, env_var(key).as_deref(), default)
}

/// Parse a millisecond duration
///
/// ## Arguments
/// * `key` - Variable name, used in the error message
/// * `raw` - Raw value (`None` selects the default)
/// * `default` - Value used when `raw` is `None`
///
/// ## Returns
/// * `Err(AppError)` - `raw` is not a positive integer
pub fn parse_duration_ms(key: &str, raw: Option<&str>, default: Duration) -> AppResult<Duration> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let millis: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
        AppError::from(e).with_action(format!("Set {key} to a duration in milliseconds"))
    })?;

    if millis == 0 {
        return Err(AppError::invalid_input(format!("{key} must be greater than zero")));
    }

    Ok(Duration::from_millis(millis))
}
