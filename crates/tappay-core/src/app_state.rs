//! Session-scoped application state store.
//!
//! A single [`AppState`] owns every piece of domain state for the
//! lifetime of the process: session identity, wallet, transfer draft,
//! pending/last transfer, history, offline scan records and the
//! navigation state. Workflows mutate it through intent-named methods;
//! the presentation layer only reads.

use crate::config::AppConfig;
use crate::error::ValidationError;
use crate::history::HistoryEntry;
use crate::navigation::{BiometricStatus, CameraStatus, NavigationState, Screen};
use crate::offline::OfflineScanRecord;
use crate::session::Session;
use crate::transfer::{TransferDetail, TransferDraft};
use crate::wallet::Wallet;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The single in-memory store backing the whole application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    session: Session,
    wallet: Wallet,
    draft: TransferDraft,
    pending: Option<TransferDetail>,
    last_transfer: Option<TransferDetail>,
    /// Newest first, append-only.
    history: Vec<HistoryEntry>,
    /// Offline payments awaiting a sync that never happens in the mock.
    offline_scans: Vec<OfflineScanRecord>,
    nav: NavigationState,
    /// Message shown inline on the current screen, if any.
    inline_error: Option<String>,
    booted: bool,
}

impl AppState {
    /// Builds the startup state: seeded history, configured balance,
    /// logged out, on the login screen.
    pub fn from_config(config: &AppConfig, now: DateTime<Utc>) -> Self {
        let history = config
            .seed_history
            .iter()
            .map(|seed| {
                HistoryEntry::new(
                    seed.recipient.clone(),
                    seed.note.clone(),
                    seed.amount,
                    seed.direction,
                    now - Duration::hours(i64::from(seed.age_hours)),
                )
            })
            .collect();

        Self {
            session: Session::new(),
            wallet: Wallet::new(config.initial_balance),
            draft: TransferDraft::default(),
            pending: None,
            last_transfer: None,
            history,
            offline_scans: Vec::new(),
            nav: NavigationState::default(),
            inline_error: None,
            booted: false,
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn draft(&self) -> &TransferDraft {
        &self.draft
    }

    /// Mutable access to the draft for form edits.
    pub fn draft_mut(&mut self) -> &mut TransferDraft {
        &mut self.draft
    }

    pub fn pending(&self) -> Option<&TransferDetail> {
        self.pending.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_transfer(&self) -> Option<&TransferDetail> {
        self.last_transfer.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn offline_scans(&self) -> &[OfflineScanRecord] {
        &self.offline_scans
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn screen(&self) -> Screen {
        self.nav.screen
    }

    pub fn biometric(&self) -> BiometricStatus {
        self.nav.biometric
    }

    pub fn camera_status(&self) -> CameraStatus {
        self.nav.camera
    }

    pub fn inline_error(&self) -> Option<&str> {
        self.inline_error.as_deref()
    }

    pub fn booted(&self) -> bool {
        self.booted
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Logs in; see [`Session::login`].
    pub fn login(&mut self, name: &str) -> Result<(), ValidationError> {
        self.session.login(name)
    }

    /// Clears the session and everything that requires one.
    pub fn logout(&mut self) {
        self.session.logout();
        self.pending = None;
        self.nav.biometric = BiometricStatus::Idle;
    }

    /// Moves to a screen, clearing any stale inline message when the
    /// screen actually changes.
    pub fn set_screen(&mut self, screen: Screen) {
        if self.nav.screen != screen {
            self.inline_error = None;
        }
        self.nav.screen = screen;
    }

    pub fn set_biometric(&mut self, status: BiometricStatus) {
        self.nav.biometric = status;
    }

    pub fn set_camera_status(&mut self, status: CameraStatus) {
        self.nav.camera = status;
    }

    /// Stages a validated transfer for biometric approval.
    pub fn stage_pending(&mut self, detail: TransferDetail) {
        self.pending = Some(detail);
    }

    /// Removes and returns the pending transfer, if any.
    pub fn take_pending(&mut self) -> Option<TransferDetail> {
        self.pending.take()
    }

    /// Applies a committed transfer: history gains a `Sent` entry at
    /// the front, the wallet is debited (clamped at zero), the draft
    /// and pending slot are cleared, the detail becomes the last
    /// transfer and the screen moves to `Success`.
    pub fn commit_transfer(&mut self, detail: TransferDetail) {
        self.history.insert(0, HistoryEntry::sent(&detail));
        self.wallet.debit(detail.amount);
        self.draft.clear();
        self.pending = None;
        self.nav.biometric = BiometricStatus::Idle;
        self.last_transfer = Some(detail);
        self.set_screen(Screen::Success);
    }

    pub fn record_offline_scan(&mut self, record: OfflineScanRecord) {
        self.offline_scans.push(record);
    }

    pub fn set_inline_error(&mut self, message: impl Into<String>) {
        self.inline_error = Some(message.into());
    }

    pub fn clear_inline_error(&mut self) {
        self.inline_error = None;
    }

    pub fn set_booted(&mut self) {
        self.booted = true;
    }
}
