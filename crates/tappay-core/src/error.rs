//! Error types for the TapPay application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TapPayError>;

/// Validation failures for user input (transfer draft or login name).
///
/// Every variant is recoverable: the message is shown inline on the
/// current screen and the user corrects the input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The recipient field was blank after trimming.
    #[error("Enter a recipient name")]
    EmptyRecipient,

    /// The amount did not parse as a positive number.
    #[error("Enter a valid amount greater than zero")]
    InvalidAmount,

    /// The amount exceeds the available wallet balance.
    #[error("Amount exceeds your available balance")]
    InsufficientBalance,

    /// The login name was blank after trimming.
    #[error("Enter your name to continue")]
    EmptyName,
}

/// Camera acquisition failures reported by the camera provider.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraError {
    /// The runtime has no camera capability at all.
    #[error("No camera is available on this device")]
    Unsupported,

    /// The user or OS denied access to the camera.
    #[error("Camera access was denied: {reason}")]
    Denied { reason: String },
}

/// A shared error type for the entire TapPay application.
///
/// This provides typed, structured error variants with automatic
/// conversion from the focused sub-error enums via the `From` trait.
/// None of these are fatal to the process; all are surfaced as inline
/// messages and the user re-invokes the action.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TapPayError {
    /// Input validation failure (draft or login).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Camera acquisition failure.
    #[error(transparent)]
    Camera(#[from] CameraError),

    /// A navigation event was attempted without its precondition.
    #[error("Cannot {event} from '{screen}': {reason}")]
    NavigationGuard {
        event: String,
        screen: String,
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TapPayError {
    /// Creates a NavigationGuard error.
    pub fn navigation_guard(
        event: impl Into<String>,
        screen: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::NavigationGuard {
            event: event.into(),
            screen: screen.into(),
            reason: reason.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a camera error
    pub fn is_camera(&self) -> bool {
        matches!(self, Self::Camera(_))
    }

    /// Check if this is a navigation guard violation
    pub fn is_navigation_guard(&self) -> bool {
        matches!(self, Self::NavigationGuard { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
