//! Display formatting helpers and mock identifier minting.
//!
//! Pure string builders used by the presentation layer: amounts with
//! thousands grouping, human-readable timestamps, avatar initials, and
//! the `TP-`/`QR-` reference minters. The minters take the random
//! source as a parameter so tests stay deterministic; `mint_*` wrappers
//! use the thread RNG.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with thousands grouping and two decimal places,
/// e.g. `2,000.00`.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

/// [`format_amount`] prefixed with a currency symbol, e.g. `₹2,000.00`.
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{symbol}{}", format_amount(amount))
}

/// Formats an instant for display, e.g. `Mar  4, 2026 14:05`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %e, %Y %H:%M").to_string()
}

/// Up-to-two uppercase initials for an avatar badge, e.g. `"Priya Sharma"` -> `"PS"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Mints a transfer reference of the shape `TP-<year>-<5 digits>`.
///
/// Collisions are not checked; references are mock identifiers, not
/// settlement keys.
pub fn transfer_reference<R: Rng>(year: i32, rng: &mut R) -> String {
    format!("TP-{year}-{:05}", rng.gen_range(0..100_000u32))
}

/// Mints a synthetic QR scan result of the shape `QR-<6 digits>`.
pub fn qr_code<R: Rng>(rng: &mut R) -> String {
    format!("QR-{:06}", rng.gen_range(0..1_000_000u32))
}

/// [`transfer_reference`] with the current year and the thread RNG.
pub fn mint_transfer_reference(now: &DateTime<Utc>) -> String {
    transfer_reference(now.year(), &mut rand::thread_rng())
}

/// [`qr_code`] with the thread RNG.
pub fn mint_qr_code() -> String {
    qr_code(&mut rand::thread_rng())
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}
