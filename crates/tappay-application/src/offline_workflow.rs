//! Offline QR-scan workflow.
//!
//! Acquires the camera through the injected provider, simulates a scan
//! after a fixed delay, and records an unsynced offline payment. The
//! stream is released exactly once (on scan completion, on leaving the
//! offline screen, or on teardown, whichever comes first); the release
//! slot makes a second release a no-op.

use std::sync::Arc;

use serde::Serialize;
use tappay_core::app_state::AppState;
use tappay_core::camera::{CameraProvider, CameraStream, Facing};
use tappay_core::clock::Clock;
use tappay_core::config::AppConfig;
use tappay_core::error::CameraError;
use tappay_core::format;
use tappay_core::navigation::{CameraStatus, Screen};
use tappay_core::offline::OfflineScanRecord;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

/// How a scan attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOutcome {
    /// The scan completed and an offline payment was recorded.
    Completed(OfflineScanRecord),
    /// The camera could not be acquired; the screen does not change.
    Failed(CameraError),
    /// A scan was already in flight; the request was ignored.
    Busy,
    /// The scan was abandoned (screen left or teardown).
    Cancelled,
}

/// Drives one camera acquisition and simulated scan at a time.
pub struct OfflineScanWorkflow {
    state: Arc<RwLock<AppState>>,
    camera: Arc<dyn CameraProvider>,
    clock: Arc<dyn Clock>,
    config: AppConfig,
    /// The acquired stream, if any. `take`-semantics guarantee the
    /// release happens at most once.
    stream: Mutex<Option<CameraStream>>,
    /// Token for the scan currently in flight, if any.
    scan: Mutex<Option<CancellationToken>>,
}

impl OfflineScanWorkflow {
    pub fn new(
        state: Arc<RwLock<AppState>>,
        camera: Arc<dyn CameraProvider>,
        clock: Arc<dyn Clock>,
        config: AppConfig,
    ) -> Self {
        Self {
            state,
            camera,
            clock,
            config,
            stream: Mutex::new(None),
            scan: Mutex::new(None),
        }
    }

    /// Starts a scan: request the camera, wait out the simulated scan,
    /// record the result and move to the offline-success screen.
    ///
    /// Re-entry while a scan is already requesting or scanning is
    /// ignored. There is no retry; a failed scan must be re-invoked by
    /// the user.
    pub async fn start_scan(&self) -> ScanOutcome {
        {
            let mut state = self.state.write().await;
            if matches!(
                state.camera_status(),
                CameraStatus::Requesting | CameraStatus::Scanning
            ) {
                tracing::warn!(target: "offline", "Scan already in flight, ignoring");
                return ScanOutcome::Busy;
            }
            state.set_camera_status(CameraStatus::Requesting);
            state.clear_inline_error();
        }

        let token = CancellationToken::new();
        *self.scan.lock().await = Some(token.clone());

        let stream = match self.camera.request_stream(Facing::Back).await {
            Ok(stream) => stream,
            Err(err) => {
                let mut state = self.state.write().await;
                state.set_camera_status(CameraStatus::Error);
                state.set_inline_error(err.to_string());
                tracing::warn!(target: "offline", error = %err, "Camera unavailable");
                return ScanOutcome::Failed(err);
            }
        };

        tracing::debug!(target: "offline", stream = stream.id(), "Camera stream acquired");
        *self.stream.lock().await = Some(stream);
        self.state
            .write()
            .await
            .set_camera_status(CameraStatus::Scanning);

        tokio::select! {
            _ = token.cancelled() => {
                self.release_stream().await;
                self.state.write().await.set_camera_status(CameraStatus::Idle);
                return ScanOutcome::Cancelled;
            }
            _ = self.clock.sleep(self.config.scan_delay()) => {}
        }

        *self.scan.lock().await = None;
        self.release_stream().await;

        let record = OfflineScanRecord {
            result_code: format::mint_qr_code(),
            recorded_at: self.clock.now(),
        };
        {
            let mut state = self.state.write().await;
            state.set_camera_status(CameraStatus::Idle);
            state.record_offline_scan(record.clone());
            state.set_screen(Screen::OfflineSuccess);
        }
        tracing::info!(
            target: "offline",
            code = %record.result_code,
            "Offline payment recorded"
        );
        ScanOutcome::Completed(record)
    }

    /// Releases the camera stream if one is held. Safe to call any
    /// number of times.
    pub async fn release_stream(&self) {
        if let Some(stream) = self.stream.lock().await.take() {
            tracing::debug!(target: "offline", stream = stream.id(), "Releasing camera stream");
            self.camera.stop(stream).await;
        }
    }

    /// Abandons any in-flight scan and releases the camera: called
    /// when the user leaves the offline screen and on teardown.
    pub async fn abort(&self) {
        if let Some(token) = self.scan.lock().await.take() {
            token.cancel();
        }
        self.release_stream().await;
        let mut state = self.state.write().await;
        if matches!(
            state.camera_status(),
            CameraStatus::Requesting | CameraStatus::Scanning
        ) {
            state.set_camera_status(CameraStatus::Idle);
        }
    }
}
