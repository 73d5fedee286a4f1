//! KYC Status Value Object
//!
//! Identity verification status as stored in the profile record.
//!
//! ## Design Decisions
//! - **Open set**: the backend may introduce new codes at any time, so any
//!   unknown code is kept verbatim in `Other`
//! - **Exact match**: only the literal `verifie` grants access; no case
//!   folding, no trimming
//! - **Default**: `unverified` until a profile record says otherwise

use serde::{Deserialize, Serialize};
use std::fmt;

/// The only code that grants access
pub const VERIFIED_CODE: &str = "verifie";

/// KYC verification status
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KycStatus {
    /// No status known yet
    #[default]
    Unverified,

    /// Verification rejected or never submitted
    NotVerified,

    /// Documents submitted, awaiting review
    Pending,

    /// Verification complete
    Verified,

    /// Any code this client does not know
    Other(String),
}

impl KycStatus {
    /// Get string code for serialization
    pub fn code(&self) -> &str {
        match self {
            Self::Unverified => "unverified",
            Self::NotVerified => "non_verifie",
            Self::Pending => "en_attente",
            Self::Verified => VERIFIED_CODE,
            Self::Other(code) => code,
        }
    }

    /// Create from string code; never fails
    pub fn from_code(code: &str) -> Self {
        match code {
            "unverified" => Self::Unverified,
            "non_verifie" => Self::NotVerified,
            "en_attente" => Self::Pending,
            VERIFIED_CODE => Self::Verified,
            other => Self::Other(other.to_string()),
        }
    }

    /// Check if gated actions may run
    #[inline]
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Check if a review is in progress
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<String> for KycStatus {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<KycStatus> for String {
    fn from(status: KycStatus) -> Self {
        match status {
            KycStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
