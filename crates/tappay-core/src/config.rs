//! Application configuration model.
//!
//! Everything tunable about the mock lives here: the starting balance,
//! the seeded history fixtures, and the cosmetic timer durations. The
//! defaults reproduce the original fixture data; the infrastructure
//! crate can override them from a `config.toml`.

use crate::history::Direction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One seeded history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub recipient: String,
    pub note: String,
    pub amount: Decimal,
    pub direction: Direction,
    /// How long before startup this entry is stamped.
    pub age_hours: u32,
}

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub initial_balance: Decimal,
    pub currency_symbol: String,
    /// Boot splash duration (cosmetic).
    pub splash_ms: u64,
    /// First biometric stage (idle -> verifying).
    pub biometric_verify_ms: u64,
    /// Second biometric stage (verifying -> verified).
    pub biometric_confirm_ms: u64,
    /// Simulated QR scan duration.
    pub scan_ms: u64,
    /// History fixtures seeded at startup, newest first.
    pub seed_history: Vec<SeedEntry>,
}

impl AppConfig {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn biometric_verify_delay(&self) -> Duration {
        Duration::from_millis(self.biometric_verify_ms)
    }

    pub fn biometric_confirm_delay(&self) -> Duration {
        Duration::from_millis(self.biometric_confirm_ms)
    }

    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_balance: Decimal::from(125_000),
            currency_symbol: "₹".to_string(),
            splash_ms: 5_000,
            biometric_verify_ms: 600,
            biometric_confirm_ms: 300,
            scan_ms: 1_500,
            seed_history: vec![
                SeedEntry {
                    recipient: "Marcus Chen".to_string(),
                    note: "Rent share".to_string(),
                    amount: Decimal::from(15_000),
                    direction: Direction::Received,
                    age_hours: 26,
                },
                SeedEntry {
                    recipient: "Priya Sharma".to_string(),
                    note: "Lunch split".to_string(),
                    amount: Decimal::new(4_250_50, 2),
                    direction: Direction::Sent,
                    age_hours: 49,
                },
                SeedEntry {
                    recipient: "Apex Mart".to_string(),
                    note: "Refund".to_string(),
                    amount: Decimal::from(1_200),
                    direction: Direction::Received,
                    age_hours: 120,
                },
            ],
        }
    }
}
