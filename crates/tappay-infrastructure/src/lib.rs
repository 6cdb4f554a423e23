//! TapPay infrastructure layer.
//!
//! Concrete implementations of the collaborator traits declared in
//! `tappay-core`: the system clock, the simulated camera providers,
//! and TOML configuration loading.

mod camera_service;
mod clock_service;
mod config_service;

pub use camera_service::{DeniedCamera, SimulatedCamera, UnsupportedCamera};
pub use clock_service::SystemClock;
pub use config_service::ConfigService;
