//! Transaction history entry types.

use crate::transfer::TransferDetail;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether money left or entered the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Sent,
    Received,
}

/// One row of the transaction history.
///
/// Entries are append-only and stored newest-first; nothing in the
/// application mutates or removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry id (UUID format).
    pub id: String,
    pub recipient: String,
    pub note: String,
    pub amount: Decimal,
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Builds a new entry with a fresh id.
    pub fn new(
        recipient: impl Into<String>,
        note: impl Into<String>,
        amount: Decimal,
        direction: Direction,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recipient: recipient.into(),
            note: note.into(),
            amount,
            direction,
            timestamp,
        }
    }

    /// Builds the `Sent` entry recorded when a transfer commits.
    pub fn sent(detail: &TransferDetail) -> Self {
        Self::new(
            detail.recipient.clone(),
            detail.note.clone(),
            detail.amount,
            Direction::Sent,
            detail.timestamp,
        )
    }
}
