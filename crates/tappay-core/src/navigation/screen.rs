//! Screen enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of application screens.
///
/// `Confirm`, `Success`, `Offline` and `OfflineSuccess` are only
/// reachable through their workflows; there are deliberately no
/// bottom-navigation events targeting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Login,
    Home,
    Transfer,
    Confirm,
    Success,
    History,
    Offline,
    OfflineSuccess,
}

impl Screen {
    /// Stable lowercase name, used in logs and guard messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "home",
            Self::Transfer => "transfer",
            Self::Confirm => "confirm",
            Self::Success => "success",
            Self::History => "history",
            Self::Offline => "offline",
            Self::OfflineSuccess => "offline_success",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
