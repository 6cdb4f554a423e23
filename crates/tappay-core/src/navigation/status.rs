//! Transient UI sub-states tracked alongside the current screen.

use super::screen::Screen;
use serde::{Deserialize, Serialize};

/// Stage of the simulated biometric approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BiometricStatus {
    #[default]
    Idle,
    Verifying,
    Verified,
}

/// Stage of the camera acquisition during an offline scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraStatus {
    #[default]
    Idle,
    Requesting,
    Scanning,
    Error,
}

/// Current screen plus the transient workflow statuses the
/// presentation layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NavigationState {
    pub screen: Screen,
    pub biometric: BiometricStatus,
    pub camera: CameraStatus,
}
