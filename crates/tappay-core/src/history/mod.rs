//! Transaction history domain module.
//!
//! - `model`: history entry types (`HistoryEntry`, `Direction`)
//! - `filter`: pure filtering over the entry sequence

mod filter;
mod model;

pub use filter::{DirectionFilter, filter_history};
pub use model::{Direction, HistoryEntry};
