//! Clock abstraction for timestamps and scheduled delays.
//!
//! All timestamping and every simulated delay (boot splash, biometric
//! pacing, QR scan) goes through this trait so workflows can be driven
//! by an instant clock in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Source of time for the application.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Suspends the calling task for the given duration.
    async fn sleep(&self, duration: Duration);
}
