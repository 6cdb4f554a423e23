//! Transfer workflow: validate, stage, simulated biometric approval,
//! commit.
//!
//! The biometric chain is a short-lived state machine
//! (`Idle -> Verifying -> Verified -> committed`) driven by the injected
//! clock under a `CancellationToken`, so teardown and the cancel button
//! are first-class transitions rather than abandoned timers. The delays
//! are UX pacing, not a security check.

use std::sync::Arc;

use serde::Serialize;
use tappay_core::app_state::AppState;
use tappay_core::clock::Clock;
use tappay_core::config::AppConfig;
use tappay_core::error::ValidationError;
use tappay_core::navigation::BiometricStatus;
use tappay_core::transfer::{TransferDetail, validate_draft};
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

/// How an approval attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproveOutcome {
    /// The chain completed and the transfer was committed.
    Committed,
    /// The chain was cancelled mid-flight; pending discarded, draft kept.
    Cancelled,
    /// There was nothing staged to approve.
    NoPending,
}

/// Orchestrates a transfer from draft to committed history entry.
pub struct TransferWorkflow {
    state: Arc<RwLock<AppState>>,
    clock: Arc<dyn Clock>,
    config: AppConfig,
    /// Token for the approval chain currently in flight, if any.
    approval: Mutex<Option<CancellationToken>>,
}

impl TransferWorkflow {
    pub fn new(state: Arc<RwLock<AppState>>, clock: Arc<dyn Clock>, config: AppConfig) -> Self {
        Self {
            state,
            clock,
            config,
            approval: Mutex::new(None),
        }
    }

    /// Validates the current draft and stages the result as the
    /// pending transfer.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] unchanged; nothing is staged and
    /// the draft is left as typed.
    pub async fn continue_to_confirm(&self) -> Result<TransferDetail, ValidationError> {
        let mut state = self.state.write().await;
        let detail = validate_draft(state.draft(), state.wallet().balance(), self.clock.now())?;
        state.stage_pending(detail.clone());
        state.clear_inline_error();
        tracing::info!(
            target: "transfer",
            reference = %detail.reference,
            "Draft validated and staged"
        );
        Ok(detail)
    }

    /// Runs the simulated biometric chain over the pending transfer,
    /// committing on completion.
    pub async fn approve(&self) -> ApproveOutcome {
        let Some(pending) = self.state.read().await.pending().cloned() else {
            tracing::warn!(target: "transfer", "Approve requested with no pending transfer");
            return ApproveOutcome::NoPending;
        };

        let token = CancellationToken::new();
        *self.approval.lock().await = Some(token.clone());

        self.state
            .write()
            .await
            .set_biometric(BiometricStatus::Verifying);

        tokio::select! {
            _ = token.cancelled() => return self.abandon_approval().await,
            _ = self.clock.sleep(self.config.biometric_verify_delay()) => {}
        }

        self.state
            .write()
            .await
            .set_biometric(BiometricStatus::Verified);

        tokio::select! {
            _ = token.cancelled() => return self.abandon_approval().await,
            _ = self.clock.sleep(self.config.biometric_confirm_delay()) => {}
        }

        *self.approval.lock().await = None;
        self.commit(pending).await;
        ApproveOutcome::Committed
    }

    /// Cancels the approval chain currently in flight, if any.
    pub async fn cancel_approval(&self) {
        if let Some(token) = self.approval.lock().await.take() {
            token.cancel();
        }
    }

    /// Discards the pending transfer and resets the biometric status.
    /// The draft is preserved so the user can edit and retry.
    pub async fn cancel_confirm(&self) {
        self.cancel_approval().await;
        let mut state = self.state.write().await;
        if state.take_pending().is_some() {
            tracing::info!(target: "transfer", "Pending transfer discarded");
        }
        state.set_biometric(BiometricStatus::Idle);
    }

    async fn abandon_approval(&self) -> ApproveOutcome {
        let mut state = self.state.write().await;
        state.take_pending();
        state.set_biometric(BiometricStatus::Idle);
        tracing::info!(target: "transfer", "Approval cancelled mid-chain");
        ApproveOutcome::Cancelled
    }

    /// Re-stamps the detail at commit time and applies it to the store.
    async fn commit(&self, detail: TransferDetail) {
        let detail = detail.with_timestamp(self.clock.now());
        let mut state = self.state.write().await;
        state.commit_transfer(detail.clone());
        tracing::info!(
            target: "transfer",
            reference = %detail.reference,
            amount = %detail.amount,
            balance = %state.wallet().balance(),
            "Transfer committed"
        );
    }
}
