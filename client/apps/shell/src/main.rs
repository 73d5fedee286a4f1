//! Shell Entry Point
//!
//! Headless host for the exit guard and the KYC gate. Each stdin line is a
//! platform event or UI tap (see [`command::Command`]).
//! Uses `anyhow` for startup errors, but component errors use
//! `kernel::error::AppError`.

mod command;

use std::env;
use std::sync::Arc;

use exit_guard::{ExitGuard, ExitGuardConfig, LogNotifier};
use kyc_gate::{
    ActionGate, GateConfig, GateOutcome, KvProfileRepository, KycStatus, PersistedProfile,
};
use platform::process::ProcessExit;
use platform::signal::BackSignalHub;
use platform::store::{JsonFileStore, KeyValueStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::command::Command;

type ShellGate = ActionGate<KvProfileRepository<JsonFileStore>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "shell=info,exit_guard=info,kyc_gate=info,platform=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Profile store
    let store_path =
        env::var("PROFILE_STORE_PATH").unwrap_or_else(|_| "shell-store.json".to_string());
    let store = JsonFileStore::new(&store_path);
    tracing::info!(path = %store_path, "Using profile store");

    // KYC gate
    let gate_config = Arc::new(GateConfig::from_env());
    let profile_repo = Arc::new(KvProfileRepository::new(
        store.clone(),
        gate_config.profile_key.clone(),
    ));
    let gate = ActionGate::new(profile_repo, gate_config.clone());

    // Exit guard, subscribed for the lifetime of the shell
    let hub = BackSignalHub::new();
    let notifier = Arc::new(LogNotifier::new());
    let guard = ExitGuard::with_tokio(
        ExitGuardConfig::from_env()?,
        notifier.clone(),
        Arc::new(ProcessExit::default()),
    )?;
    let subscription = guard.attach(&hub);

    tracing::info!(
        exit_window_ms = guard.config().exit_window_ms(),
        profile_key = %gate_config.profile_key,
        "Shell ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!(
                    code = e.code(),
                    message = e.message(),
                    hint = e.action().unwrap_or_default(),
                    "Ignoring input"
                );
                continue;
            }
        };

        match command {
            Command::Back => {
                let suppressed = hub.dispatch();
                tracing::debug!(suppressed, "Back handled");
            }
            Command::Cancel => {
                if !notifier.cancel_latest() {
                    tracing::info!("No exit notice to cancel");
                }
            }
            Command::Run => run_gated_action(&gate).await,
            Command::Dismiss => gate.dismiss_prompt(),
            Command::Status => {
                tracing::info!(
                    guard_state = %guard.state(),
                    press_count = guard.press_count(),
                    kyc_status = %gate.verification_status(),
                    prompt_visible = gate.prompt_visible(),
                    "Status"
                );
            }
            Command::Verify(code) => {
                let profile = PersistedProfile::with_status(&KycStatus::from_code(&code));
                let raw = serde_json::to_string(&profile)?;
                if let Err(e) = store.set_item(&gate_config.profile_key, &raw).await {
                    tracing::error!(error = %e, "Failed to store profile");
                } else {
                    tracing::info!(status = %code, "Profile stored");
                }
            }
            Command::Clear => {
                if let Err(e) = store.remove_item(&gate_config.profile_key).await {
                    tracing::error!(error = %e, "Failed to remove profile");
                } else {
                    tracing::info!("Profile removed");
                }
            }
            Command::Quit => break,
        }
    }

    subscription.release();
    tracing::info!("Shell stopped");
    Ok(())
}

async fn run_gated_action(gate: &ShellGate) {
    let outcome = gate
        .run_gated(|| async {
            tracing::info!("Gated action running");
            Ok::<_, anyhow::Error>("done")
        })
        .await;

    match outcome {
        Ok(GateOutcome::Completed(result)) => {
            tracing::info!(result, "Gated action completed");
        }
        Ok(GateOutcome::Blocked) => {
            let prompt = gate.prompt();
            tracing::warn!(
                title = %prompt.title,
                message = %prompt.message,
                "Verification prompt shown"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Gated action failed");
        }
    }
}
