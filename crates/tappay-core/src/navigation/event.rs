//! Navigation events dispatched by the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// High-level events the presentation layer can dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavEvent {
    /// Login form submitted with the entered name.
    LoginSubmit { name: String },
    /// Bottom-navigation jump to home.
    GoHome,
    /// Bottom-navigation jump to the transfer screen.
    GoTransfer,
    /// Bottom-navigation jump to the history screen.
    GoHistory,
    /// Continue from the transfer form to confirmation.
    ContinueToConfirm,
    /// Approve the pending transfer (starts the biometric chain).
    ApproveTransfer,
    /// Cancel on the confirmation screen, discarding the pending transfer.
    CancelConfirm,
    /// Context-sensitive back edge.
    Back,
    /// Switch from the transfer form to the offline-QR flow.
    GoOffline,
    /// Start a QR scan on the offline screen.
    StartQrScan,
    /// Explicit logout.
    Logout,
}

impl NavEvent {
    /// Stable snake_case name, used in logs and guard messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSubmit { .. } => "login_submit",
            Self::GoHome => "go_home",
            Self::GoTransfer => "go_transfer",
            Self::GoHistory => "go_history",
            Self::ContinueToConfirm => "continue_to_confirm",
            Self::ApproveTransfer => "approve_transfer",
            Self::CancelConfirm => "cancel_confirm",
            Self::Back => "back",
            Self::GoOffline => "go_offline",
            Self::StartQrScan => "start_qr_scan",
            Self::Logout => "logout",
        }
    }
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
