//! Camera provider abstraction used by the offline-QR workflow.
//!
//! The real camera plumbing lives outside this workspace; the workflow
//! only needs to acquire a stream, hold it for the duration of a scan,
//! and release it exactly once.

use crate::error::CameraError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which device camera to acquire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// The rear-facing (environment) camera.
    Back,
    /// The user-facing camera.
    Front,
}

/// Opaque handle to an acquired camera stream.
///
/// The handle is moved into [`CameraProvider::stop`] when released, so
/// the type system already prevents most double-release mistakes; the
/// provider must additionally treat stopping an unknown handle as a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraStream {
    id: String,
}

impl CameraStream {
    /// Creates a fresh stream handle with a unique id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
        }
    }

    /// The unique id of this stream.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for CameraStream {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider of device camera streams.
///
/// Implementations live in the infrastructure crate; tests supply
/// denying or unsupported fakes.
#[async_trait]
pub trait CameraProvider: Send + Sync {
    /// Requests a camera stream for the given facing.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::Unsupported`] when the runtime has no
    /// camera capability, or [`CameraError::Denied`] when the user or
    /// OS refuses access.
    async fn request_stream(&self, facing: Facing) -> Result<CameraStream, CameraError>;

    /// Releases a previously acquired stream.
    ///
    /// Must be idempotent: stopping a stream that is already stopped
    /// (or was never started) is a no-op, not an error.
    async fn stop(&self, stream: CameraStream);
}
