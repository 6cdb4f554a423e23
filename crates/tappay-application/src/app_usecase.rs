//! Application use case: event dispatch over the navigation reducer.
//!
//! `AppUseCase` owns the shared state and both workflows. Every
//! presentation event comes through [`AppUseCase::dispatch`], which
//! first applies the continuous logged-out-means-login invariant, then
//! asks the pure reducer whether the event is legal, and finally
//! performs the event's domain effect.

use std::sync::Arc;

use tappay_core::app_state::AppState;
use tappay_core::camera::CameraProvider;
use tappay_core::clock::Clock;
use tappay_core::config::AppConfig;
use tappay_core::error::{Result, ValidationError};
use tappay_core::history::{DirectionFilter, HistoryEntry, filter_history};
use tappay_core::navigation::{
    NavContext, NavEvent, Screen, Transition, enforce_session, reduce,
};
use tappay_infrastructure::{SimulatedCamera, SystemClock};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::offline_workflow::{OfflineScanWorkflow, ScanOutcome};
use crate::transfer_workflow::{ApproveOutcome, TransferWorkflow};

/// Coordinates the state store, the navigation reducer and the two
/// workflows for one user session.
pub struct AppUseCase {
    state: Arc<RwLock<AppState>>,
    transfer: TransferWorkflow,
    offline: OfflineScanWorkflow,
    clock: Arc<dyn Clock>,
    config: AppConfig,
    /// Cancelled on teardown; stops the splash and any in-flight chain.
    shutdown: CancellationToken,
}

impl AppUseCase {
    /// Creates a use case with explicit collaborators.
    pub fn new(
        config: AppConfig,
        clock: Arc<dyn Clock>,
        camera: Arc<dyn CameraProvider>,
    ) -> Self {
        let state = Arc::new(RwLock::new(AppState::from_config(&config, clock.now())));
        let transfer = TransferWorkflow::new(state.clone(), clock.clone(), config.clone());
        let offline =
            OfflineScanWorkflow::new(state.clone(), camera, clock.clone(), config.clone());
        Self {
            state,
            transfer,
            offline,
            clock,
            config,
            shutdown: CancellationToken::new(),
        }
    }

    /// Creates a use case with the system clock and the simulated
    /// camera, the wiring the mock app ships with.
    pub fn with_defaults(config: AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(SystemClock),
            Arc::new(SimulatedCamera::new()),
        )
    }

    /// Shared handle to the state store for the presentation layer.
    pub fn state(&self) -> Arc<RwLock<AppState>> {
        self.state.clone()
    }

    /// Runs the cosmetic boot splash. Cancellable by [`Self::teardown`];
    /// has no effect on domain state beyond the `booted` flag.
    pub async fn boot(&self) {
        tracing::info!(target: "boot", splash_ms = self.config.splash_ms, "Splash started");
        tokio::select! {
            _ = self.shutdown.cancelled() => {
                tracing::info!(target: "boot", "Splash cancelled");
                return;
            }
            _ = self.clock.sleep(self.config.splash_delay()) => {}
        }
        self.state.write().await.set_booted();
        tracing::info!(target: "boot", "Ready");
    }

    /// Dispatches one navigation event and returns the screen the
    /// application is on afterwards.
    ///
    /// # Errors
    ///
    /// Validation failures, camera failures and guard violations are
    /// returned to the caller *and* surfaced as the inline message on
    /// the current screen; none of them are fatal.
    pub async fn dispatch(&self, event: NavEvent) -> Result<Screen> {
        let mut ctx = self.snapshot().await;

        // Continuous invariant, checked on every dispatch.
        if let Some(forced) = enforce_session(&ctx) {
            tracing::warn!(
                target: "navigation",
                screen = ctx.screen.name(),
                "Not logged in, forcing login screen"
            );
            self.state.write().await.set_screen(forced);
            ctx.screen = forced;
        }

        match reduce(&ctx, &event) {
            Transition::Denied(err) => {
                self.state.write().await.set_inline_error(err.to_string());
                tracing::warn!(
                    target: "navigation",
                    event = event.name(),
                    error = %err,
                    "Navigation denied"
                );
                Err(err)
            }
            Transition::Stay => {
                if matches!(event, NavEvent::LoginSubmit { .. }) {
                    let err = ValidationError::EmptyName;
                    self.state.write().await.set_inline_error(err.to_string());
                    return Err(err.into());
                }
                Ok(ctx.screen)
            }
            Transition::Goto(target) => self.perform(event, ctx, target).await,
        }
    }

    /// History entries matching the given filter and query, newest
    /// first.
    pub async fn history_view(
        &self,
        filter: DirectionFilter,
        query: &str,
    ) -> Vec<HistoryEntry> {
        let state = self.state.read().await;
        filter_history(state.history(), filter, query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Stops everything in flight: splash, biometric chain, camera.
    pub async fn teardown(&self) {
        self.shutdown.cancel();
        self.transfer.cancel_approval().await;
        self.offline.abort().await;
        tracing::info!(target: "navigation", "Teardown complete");
    }

    async fn snapshot(&self) -> NavContext {
        let state = self.state.read().await;
        NavContext {
            screen: state.screen(),
            logged_in: state.session().is_logged_in(),
            has_pending: state.has_pending(),
        }
    }

    async fn perform(&self, event: NavEvent, ctx: NavContext, target: Screen) -> Result<Screen> {
        // Leaving the offline screen by any edge stops the camera and
        // abandons the scan timer.
        if ctx.screen == Screen::Offline
            && target != Screen::Offline
            && !matches!(event, NavEvent::StartQrScan)
        {
            self.offline.abort().await;
        }

        match event {
            NavEvent::LoginSubmit { name } => {
                let mut state = self.state.write().await;
                state.login(&name)?;
                state.set_screen(Screen::Home);
                tracing::info!(
                    target: "session",
                    user = state.session().user_name().unwrap_or_default(),
                    "Logged in"
                );
                Ok(Screen::Home)
            }
            NavEvent::Logout => {
                self.transfer.cancel_approval().await;
                let mut state = self.state.write().await;
                state.logout();
                state.set_screen(Screen::Login);
                tracing::info!(target: "session", "Logged out");
                Ok(Screen::Login)
            }
            NavEvent::GoHome
            | NavEvent::GoTransfer
            | NavEvent::GoHistory
            | NavEvent::GoOffline => {
                self.state.write().await.set_screen(target);
                Ok(target)
            }
            NavEvent::Back | NavEvent::CancelConfirm => {
                if ctx.screen == Screen::Confirm {
                    self.transfer.cancel_confirm().await;
                }
                self.state.write().await.set_screen(target);
                Ok(target)
            }
            NavEvent::ContinueToConfirm => {
                match self.transfer.continue_to_confirm().await {
                    Ok(_) => {
                        self.state.write().await.set_screen(Screen::Confirm);
                        Ok(Screen::Confirm)
                    }
                    Err(err) => {
                        self.state.write().await.set_inline_error(err.to_string());
                        Err(err.into())
                    }
                }
            }
            NavEvent::ApproveTransfer => match self.transfer.approve().await {
                // commit_transfer already moved the screen to Success.
                ApproveOutcome::Committed => Ok(Screen::Success),
                ApproveOutcome::NoPending | ApproveOutcome::Cancelled => {
                    self.state.write().await.set_screen(Screen::Transfer);
                    Ok(Screen::Transfer)
                }
            },
            NavEvent::StartQrScan => match self.offline.start_scan().await {
                ScanOutcome::Completed(_) => Ok(Screen::OfflineSuccess),
                // Camera failure stays on the offline screen; the
                // inline message was set by the workflow.
                ScanOutcome::Failed(err) => Err(err.into()),
                ScanOutcome::Busy | ScanOutcome::Cancelled => {
                    Ok(self.state.read().await.screen())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::time::Duration;
    use tappay_core::camera::{CameraStream, Facing};
    use tappay_core::error::CameraError;

    struct InstantClock;

    #[async_trait]
    impl Clock for InstantClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }

        async fn sleep(&self, _duration: Duration) {}
    }

    struct GrantingCamera;

    #[async_trait]
    impl CameraProvider for GrantingCamera {
        async fn request_stream(
            &self,
            _facing: Facing,
        ) -> std::result::Result<CameraStream, CameraError> {
            Ok(CameraStream::new())
        }

        async fn stop(&self, _stream: CameraStream) {}
    }

    fn app() -> AppUseCase {
        AppUseCase::new(
            AppConfig::default(),
            Arc::new(InstantClock),
            Arc::new(GrantingCamera),
        )
    }

    #[tokio::test]
    async fn test_blank_login_stays_with_inline_error() {
        let app = app();
        let err = app
            .dispatch(NavEvent::LoginSubmit {
                name: "  ".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let state = app.state();
        let st = state.read().await;
        assert_eq!(st.screen(), Screen::Login);
        assert!(!st.session().is_logged_in());
        assert!(st.inline_error().is_some());
    }

    #[tokio::test]
    async fn test_login_moves_home() {
        let app = app();
        let screen = app
            .dispatch(NavEvent::LoginSubmit {
                name: "Asha".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(screen, Screen::Home);
        let state = app.state();
        assert!(state.read().await.session().is_logged_in());
    }

    #[tokio::test]
    async fn test_guarded_jumps_rejected_while_logged_out() {
        let app = app();
        for event in [NavEvent::GoTransfer, NavEvent::GoHistory, NavEvent::GoHome] {
            let err = app.dispatch(event).await.unwrap_err();
            assert!(err.is_navigation_guard());
        }
        let state = app.state();
        assert_eq!(state.read().await.screen(), Screen::Login);
    }

    #[tokio::test]
    async fn test_session_invariant_forces_login() {
        let app = app();
        // Corrupt the state into an impossible position: logged out but
        // not on the login screen.
        app.state().write().await.set_screen(Screen::Transfer);

        let _ = app.dispatch(NavEvent::GoHistory).await;

        let state = app.state();
        assert_eq!(state.read().await.screen(), Screen::Login);
    }

    #[tokio::test]
    async fn test_boot_marks_ready() {
        let app = app();
        app.boot().await;
        let state = app.state();
        assert!(state.read().await.booted());
    }

    #[tokio::test]
    async fn test_teardown_cancels_boot() {
        struct NeverClock;

        #[async_trait]
        impl Clock for NeverClock {
            fn now(&self) -> DateTime<Utc> {
                Utc::now()
            }

            async fn sleep(&self, _duration: Duration) {
                std::future::pending::<()>().await;
            }
        }

        let app = Arc::new(AppUseCase::new(
            AppConfig::default(),
            Arc::new(NeverClock),
            Arc::new(GrantingCamera),
        ));
        let boot = tokio::spawn({
            let app = app.clone();
            async move { app.boot().await }
        });
        tokio::task::yield_now().await;
        app.teardown().await;
        boot.await.unwrap();

        let state = app.state();
        assert!(!state.read().await.booted());
    }

    #[tokio::test]
    async fn test_back_from_confirm_discards_pending() {
        let app = app();
        app.dispatch(NavEvent::LoginSubmit {
            name: "Asha".to_string(),
        })
        .await
        .unwrap();
        app.dispatch(NavEvent::GoTransfer).await.unwrap();
        {
            let state = app.state();
            let mut st = state.write().await;
            let draft = st.draft_mut();
            draft.recipient = "Asha".to_string();
            draft.amount = "10".to_string();
        }
        app.dispatch(NavEvent::ContinueToConfirm).await.unwrap();

        let screen = app.dispatch(NavEvent::Back).await.unwrap();

        assert_eq!(screen, Screen::Transfer);
        let state = app.state();
        let st = state.read().await;
        assert!(!st.has_pending());
        assert_eq!(st.draft().recipient, "Asha");
    }
}
