//! Camera provider implementations.
//!
//! The mock app has no real camera plumbing; `SimulatedCamera` always
//! grants a synthetic stream so the offline-QR flow can be driven end
//! to end. `UnsupportedCamera` and `DeniedCamera` reproduce the two
//! failure modes of a real device.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use tappay_core::camera::{CameraProvider, CameraStream, Facing};
use tappay_core::error::CameraError;

/// Always grants a stream. Tracks which streams are live so that
/// stopping an already-stopped stream is a no-op.
#[derive(Debug, Default)]
pub struct SimulatedCamera {
    active: Mutex<HashSet<String>>,
}

impl SimulatedCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of streams currently live.
    pub fn active_streams(&self) -> usize {
        self.active.lock().unwrap().len()
    }
}

#[async_trait]
impl CameraProvider for SimulatedCamera {
    async fn request_stream(&self, facing: Facing) -> Result<CameraStream, CameraError> {
        let stream = CameraStream::new();
        self.active.lock().unwrap().insert(stream.id().to_string());
        tracing::debug!(target: "camera", ?facing, stream = stream.id(), "Stream granted");
        Ok(stream)
    }

    async fn stop(&self, stream: CameraStream) {
        let removed = self.active.lock().unwrap().remove(stream.id());
        if removed {
            tracing::debug!(target: "camera", stream = stream.id(), "Stream stopped");
        }
    }
}

/// Reports no camera capability at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedCamera;

#[async_trait]
impl CameraProvider for UnsupportedCamera {
    async fn request_stream(&self, _facing: Facing) -> Result<CameraStream, CameraError> {
        Err(CameraError::Unsupported)
    }

    async fn stop(&self, _stream: CameraStream) {}
}

/// Denies every request with a fixed reason.
#[derive(Debug, Clone)]
pub struct DeniedCamera {
    reason: String,
}

impl DeniedCamera {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CameraProvider for DeniedCamera {
    async fn request_stream(&self, _facing: Facing) -> Result<CameraStream, CameraError> {
        Err(CameraError::Denied {
            reason: self.reason.clone(),
        })
    }

    async fn stop(&self, _stream: CameraStream) {}
}
