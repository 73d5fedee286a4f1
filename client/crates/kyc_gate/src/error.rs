//! KYC Gate Error Types
//!
//! This module provides gate-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! None of these reach the caller of a gated action: the gate logs them and
//! treats the user as unverified.

use kernel::error::kind::ErrorKind;
use platform::store::StoreError;
use thiserror::Error;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

/// Gate-specific error variants
#[derive(Debug, Error)]
pub enum GateError {
    /// Key-value store failed
    #[error("Profile store error: {0}")]
    Store(#[from] StoreError),

    /// Stored profile is not valid JSON
    #[error("Malformed profile record: {0}")]
    MalformedProfile(#[from] serde_json::Error),
}

impl GateError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::Store(StoreError::Corrupted(_)) | GateError::MalformedProfile(_) => {
                ErrorKind::CorruptData
            }
            GateError::Store(StoreError::Io(_)) | GateError::Store(StoreError::Unavailable(_)) => {
                ErrorKind::Unavailable
            }
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        let kind = self.kind();
        match self {
            GateError::Store(e) => {
                tracing::warn!(
                    %kind,
                    retryable = kind.is_retryable(),
                    error = %e,
                    "Profile store read failed, treating as unverified"
                );
            }
            GateError::MalformedProfile(e) => {
                tracing::warn!(
                    %kind,
                    error = %e,
                    "Profile record unreadable, treating as unverified"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            GateError::MalformedProfile(parse_err).kind(),
            ErrorKind::CorruptData
        );
        assert_eq!(
            GateError::Store(StoreError::Unavailable("offline".into())).kind(),
            ErrorKind::Unavailable
        );
        assert!(
            GateError::Store(StoreError::Unavailable("offline".into()))
                .kind()
                .is_retryable()
        );
    }

    #[test]
    fn test_corrupted_store_is_data_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = GateError::from(StoreError::Corrupted(parse_err));
        assert_eq!(err.kind(), ErrorKind::CorruptData);
        assert!(err.to_string().contains("Profile store error"));
    }
}
