//! Action Gate
//!
//! Runs an action only for KYC-verified users and raises the verification
//! prompt otherwise.
//!
//! Concurrent calls are not serialized. Each one reads, resolves and acts on
//! its own; the status and prompt flags are last-write-wins.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use platform::dialog::Dialog;
use tokio::sync::watch;

use crate::application::config::GateConfig;
use crate::application::resolve_verification::ResolveVerificationUseCase;
use crate::domain::kyc_status::KycStatus;
use crate::domain::repository::ProfileRepository;
use crate::presentation::prompt::verification_prompt;

/// Result of a gated call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<T> {
    /// User was verified and the action ran
    Completed(T),
    /// User was not verified; the action did not run
    Blocked,
}

impl<T> GateOutcome<T> {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked)
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Blocked => None,
        }
    }
}

/// KYC pre-condition gate for one screen
pub struct ActionGate<R>
where
    R: ProfileRepository + Send + Sync,
{
    resolver: ResolveVerificationUseCase<R>,
    config: Arc<GateConfig>,
    status: Mutex<KycStatus>,
    prompt_visible: watch::Sender<bool>,
}

impl<R> ActionGate<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(profile_repo: Arc<R>, config: Arc<GateConfig>) -> Self {
        let (prompt_visible, _) = watch::channel(false);
        Self {
            resolver: ResolveVerificationUseCase::new(profile_repo),
            config,
            status: Mutex::new(KycStatus::default()),
            prompt_visible,
        }
    }

    fn status(&self) -> MutexGuard<'_, KycStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the stored profile and report whether the user is verified
    ///
    /// Never fails: a missing, unreadable or malformed profile is logged and
    /// reported as not verified. When a profile is read, its status becomes
    /// the current [`verification_status`](Self::verification_status).
    pub async fn resolve_verification(&self) -> bool {
        match self.resolver.execute().await {
            Ok(Some(status)) => {
                let verified = status.is_verified();
                tracing::debug!(status = %status, verified, "KYC status resolved");
                *self.status() = status;
                verified
            }
            Ok(None) => {
                tracing::debug!(
                    profile_key = %self.config.profile_key,
                    "No stored profile, treating as unverified"
                );
                false
            }
            Err(e) => {
                e.log();
                false
            }
        }
    }

    /// Run `action` if the user is verified right now
    ///
    /// The action is invoked at most once, and only after a fresh
    /// resolution. Its error is returned unchanged. When the user is not
    /// verified the prompt becomes visible and `Ok(GateOutcome::Blocked)` is
    /// returned.
    pub async fn run_gated<F, Fut, T, E>(&self, action: F) -> Result<GateOutcome<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if !self.resolve_verification().await {
            tracing::info!(
                status = %self.verification_status(),
                "Gated action blocked, showing verification prompt"
            );
            self.prompt_visible.send_replace(true);
            return Ok(GateOutcome::Blocked);
        }

        action().await.map(GateOutcome::Completed)
    }

    /// Hide the verification prompt
    pub fn dismiss_prompt(&self) {
        self.prompt_visible.send_replace(false);
    }

    pub fn prompt_visible(&self) -> bool {
        *self.prompt_visible.borrow()
    }

    /// Watch prompt visibility changes
    pub fn subscribe_prompt(&self) -> watch::Receiver<bool> {
        self.prompt_visible.subscribe()
    }

    /// Last status read from a stored profile
    pub fn verification_status(&self) -> KycStatus {
        self.status().clone()
    }

    /// Prompt content for the current status
    pub fn prompt(&self) -> Dialog {
        verification_prompt(&self.config, &self.status())
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }
}
