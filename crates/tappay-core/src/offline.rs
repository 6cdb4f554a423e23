//! Offline payment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A locally recorded offline payment captured from a QR scan.
///
/// Offline records are kept apart from the transaction history on
/// purpose: they await a later synchronization step that this mock
/// never performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineScanRecord {
    /// Synthetic scan result of the shape `QR-<6 digits>`.
    pub result_code: String,
    pub recorded_at: DateTime<Utc>,
}
