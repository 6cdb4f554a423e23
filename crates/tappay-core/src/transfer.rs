//! Transfer draft and validated transfer detail.
//!
//! A [`TransferDraft`] is raw user input. Validation turns it into an
//! immutable [`TransferDetail`], which is consumed exactly once: either
//! committed into history or discarded on cancel.

use crate::error::ValidationError;
use crate::format;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw, unvalidated transfer input as the user typed it.
///
/// The amount is kept as a string because it may contain grouping
/// characters (`2,000`); parsing happens in [`validate_draft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TransferDraft {
    pub recipient: String,
    pub amount: String,
    pub note: String,
}

impl TransferDraft {
    /// Resets all fields to empty.
    pub fn clear(&mut self) {
        self.recipient.clear();
        self.amount.clear();
        self.note.clear();
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.recipient.is_empty() && self.amount.is_empty() && self.note.is_empty()
    }
}

/// A validated transfer awaiting biometric approval.
///
/// Immutable once created; the timestamp is re-stamped at commit time
/// via [`TransferDetail::with_timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDetail {
    pub recipient: String,
    pub amount: Decimal,
    pub note: String,
    /// Mock reference of the shape `TP-<year>-<5 digits>`.
    pub reference: String,
    pub timestamp: DateTime<Utc>,
}

impl TransferDetail {
    /// Returns a copy stamped with the given instant.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Parses a user-entered amount string.
///
/// Grouping separators (commas and spaces) are stripped before parsing.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAmount`] if the stripped string is
/// not a number or is not strictly positive.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != ' ')
        .collect();
    let amount = Decimal::from_str(&stripped).map_err(|_| ValidationError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(amount)
}

/// Validates a draft against the current balance.
///
/// On success the amount is rounded half-away-from-zero to two decimal
/// places, a fresh `TP-` reference is minted and the detail is stamped
/// with `now`. No state is mutated; staging the result as the pending
/// transfer is the workflow's job.
///
/// # Errors
///
/// - [`ValidationError::EmptyRecipient`] if the recipient is blank.
/// - [`ValidationError::InvalidAmount`] if the amount does not parse as
///   a positive number.
/// - [`ValidationError::InsufficientBalance`] if the amount exceeds the
///   balance (equality passes).
pub fn validate_draft(
    draft: &TransferDraft,
    balance: Decimal,
    now: DateTime<Utc>,
) -> Result<TransferDetail, ValidationError> {
    let recipient = draft.recipient.trim();
    if recipient.is_empty() {
        return Err(ValidationError::EmptyRecipient);
    }

    let amount = parse_amount(&draft.amount)?;
    if amount > balance {
        return Err(ValidationError::InsufficientBalance);
    }

    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(TransferDetail {
        recipient: recipient.to_string(),
        amount,
        note: draft.note.trim().to_string(),
        reference: format::mint_transfer_reference(&now),
        timestamp: now,
    })
}
