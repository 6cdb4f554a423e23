//! TapPay use-case layer.
//!
//! Coordinates the domain store and the navigation reducer from
//! `tappay-core` with injected collaborators (clock, camera) to run
//! the transfer and offline-QR workflows.

pub mod app_usecase;
pub mod offline_workflow;
pub mod transfer_workflow;

pub use app_usecase::AppUseCase;
pub use offline_workflow::{OfflineScanWorkflow, ScanOutcome};
pub use transfer_workflow::{ApproveOutcome, TransferWorkflow};
