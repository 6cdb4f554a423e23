use std::sync::Arc;

use rust_decimal_macros::dec;
use tappay_application::AppUseCase;
use tappay_core::config::AppConfig;
use tappay_core::history::{Direction, DirectionFilter};
use tappay_core::navigation::{CameraStatus, NavEvent, Screen};
use tappay_infrastructure::{SimulatedCamera, SystemClock, UnsupportedCamera};

/// Fixture config with the cosmetic delays shrunk so the suite runs
/// instantly against the real system clock.
fn fast_config() -> AppConfig {
    AppConfig {
        splash_ms: 1,
        biometric_verify_ms: 1,
        biometric_confirm_ms: 1,
        scan_ms: 1,
        ..AppConfig::default()
    }
}

async fn login(app: &AppUseCase, name: &str) {
    app.dispatch(NavEvent::LoginSubmit {
        name: name.to_string(),
    })
    .await
    .expect("login should succeed");
}

async fn fill_draft(app: &AppUseCase, recipient: &str, amount: &str, note: &str) {
    let state = app.state();
    let mut st = state.write().await;
    let draft = st.draft_mut();
    draft.recipient = recipient.to_string();
    draft.amount = amount.to_string();
    draft.note = note.to_string();
}

#[tokio::test]
async fn test_full_transfer_scenario() -> anyhow::Result<()> {
    let app = AppUseCase::with_defaults(fast_config());
    app.boot().await;

    login(&app, "Asha").await;
    app.dispatch(NavEvent::GoTransfer).await?;
    fill_draft(&app, "Asha", "2,000", "lunch").await;

    let screen = app.dispatch(NavEvent::ContinueToConfirm).await?;
    assert_eq!(screen, Screen::Confirm);

    let screen = app.dispatch(NavEvent::ApproveTransfer).await?;
    assert_eq!(screen, Screen::Success);

    let state = app.state();
    let st = state.read().await;
    assert!(st.booted());
    assert_eq!(st.wallet().balance(), dec!(123000));
    let entry = &st.history()[0];
    assert_eq!(entry.recipient, "Asha");
    assert_eq!(entry.amount, dec!(2000));
    assert_eq!(entry.direction, Direction::Sent);
    let last = st.last_transfer().expect("last transfer recorded");
    assert!(last.reference.starts_with("TP-"));
    assert!(st.draft().is_empty());
    assert!(!st.has_pending());
    Ok(())
}

#[tokio::test]
async fn test_insufficient_balance_leaves_state_untouched() {
    let config = AppConfig {
        initial_balance: dec!(500),
        ..fast_config()
    };
    let app = AppUseCase::with_defaults(config);

    login(&app, "Asha").await;
    app.dispatch(NavEvent::GoTransfer).await.unwrap();
    fill_draft(&app, "Asha", "600", "").await;

    let err = app.dispatch(NavEvent::ContinueToConfirm).await.unwrap_err();
    assert!(err.is_validation());

    let state = app.state();
    let st = state.read().await;
    assert_eq!(st.screen(), Screen::Transfer);
    assert_eq!(st.wallet().balance(), dec!(500));
    assert!(st.inline_error().is_some());
    assert!(!st.has_pending());
}

#[tokio::test]
async fn test_offline_scan_records_payment_and_releases_camera() {
    let camera = Arc::new(SimulatedCamera::new());
    let app = AppUseCase::new(fast_config(), Arc::new(SystemClock), camera.clone());

    login(&app, "Asha").await;
    app.dispatch(NavEvent::GoTransfer).await.unwrap();
    app.dispatch(NavEvent::GoOffline).await.unwrap();

    let screen = app.dispatch(NavEvent::StartQrScan).await.unwrap();
    assert_eq!(screen, Screen::OfflineSuccess);

    let state = app.state();
    let st = state.read().await;
    assert_eq!(st.offline_scans().len(), 1);
    assert!(st.offline_scans()[0].result_code.starts_with("QR-"));
    assert_eq!(st.camera_status(), CameraStatus::Idle);
    // Offline records never reach the transaction history.
    assert_eq!(st.history().len(), AppConfig::default().seed_history.len());
    // The camera stream was released.
    assert_eq!(camera.active_streams(), 0);
}

#[tokio::test]
async fn test_scan_without_camera_support_stays_on_offline() {
    let app = AppUseCase::new(
        fast_config(),
        Arc::new(SystemClock),
        Arc::new(UnsupportedCamera),
    );

    login(&app, "Asha").await;
    app.dispatch(NavEvent::GoTransfer).await.unwrap();
    app.dispatch(NavEvent::GoOffline).await.unwrap();

    let err = app.dispatch(NavEvent::StartQrScan).await.unwrap_err();
    assert!(err.is_camera());

    let state = app.state();
    let st = state.read().await;
    assert_eq!(st.screen(), Screen::Offline);
    assert_eq!(st.camera_status(), CameraStatus::Error);
    assert!(st.inline_error().is_some());
    assert!(st.offline_scans().is_empty());
}

#[tokio::test]
async fn test_leaving_offline_screen_releases_camera() {
    let camera = Arc::new(SimulatedCamera::new());
    let app = AppUseCase::new(fast_config(), Arc::new(SystemClock), camera.clone());

    login(&app, "Asha").await;
    app.dispatch(NavEvent::GoTransfer).await.unwrap();
    app.dispatch(NavEvent::GoOffline).await.unwrap();
    let screen = app.dispatch(NavEvent::Back).await.unwrap();

    assert_eq!(screen, Screen::Transfer);
    assert_eq!(camera.active_streams(), 0);
}

#[tokio::test]
async fn test_history_filter_round_trip_after_commit() -> anyhow::Result<()> {
    let app = AppUseCase::with_defaults(fast_config());
    login(&app, "Asha").await;
    app.dispatch(NavEvent::GoTransfer).await?;
    fill_draft(&app, "Asha", "2000", "lunch").await;
    app.dispatch(NavEvent::ContinueToConfirm).await?;
    app.dispatch(NavEvent::ApproveTransfer).await?;

    let all = app.history_view(DirectionFilter::All, "").await;
    let sent = app.history_view(DirectionFilter::Sent, "").await;
    let received = app.history_view(DirectionFilter::Received, "").await;
    assert_eq!(sent.len() + received.len(), all.len());
    assert_eq!(all[0].recipient, "Asha");

    // Cycling the filter back to All restores the exact original set.
    let again = app.history_view(DirectionFilter::All, "").await;
    let ids: Vec<&str> = again.iter().map(|e| e.id.as_str()).collect();
    let expected: Vec<&str> = all.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, expected);

    let queried = app.history_view(DirectionFilter::All, "LUNCH").await;
    assert!(queried.iter().any(|e| e.recipient == "Asha"));
    Ok(())
}

#[tokio::test]
async fn test_logout_returns_to_login_and_guards_reengage() {
    let app = AppUseCase::with_defaults(fast_config());
    login(&app, "Asha").await;
    app.dispatch(NavEvent::GoHistory).await.unwrap();

    let screen = app.dispatch(NavEvent::Logout).await.unwrap();
    assert_eq!(screen, Screen::Login);

    let err = app.dispatch(NavEvent::GoTransfer).await.unwrap_err();
    assert!(err.is_navigation_guard());
    let state = app.state();
    assert_eq!(state.read().await.screen(), Screen::Login);
}
