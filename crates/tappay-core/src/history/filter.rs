//! Pure filtering over the transaction history.

use super::model::{Direction, HistoryEntry};
use serde::{Deserialize, Serialize};

/// Direction filter selected in the history view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DirectionFilter {
    #[default]
    All,
    Sent,
    Received,
}

impl DirectionFilter {
    fn matches(&self, direction: Direction) -> bool {
        match self {
            Self::All => true,
            Self::Sent => direction == Direction::Sent,
            Self::Received => direction == Direction::Received,
        }
    }
}

/// Filters history entries by direction and free-text query.
///
/// The query matches case-insensitively against recipient or note; an
/// empty query matches everything. The underlying newest-first order is
/// preserved; the filter never re-sorts.
pub fn filter_history<'a>(
    entries: &'a [HistoryEntry],
    filter: DirectionFilter,
    query: &str,
) -> Vec<&'a HistoryEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| filter.matches(entry.direction))
        .filter(|entry| {
            needle.is_empty()
                || entry.recipient.to_lowercase().contains(&needle)
                || entry.note.to_lowercase().contains(&needle)
        })
        .collect()
}
