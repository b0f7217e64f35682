//! Utils

use std::str::FromStr;

use clap::Parser;
use rust_decimal::Decimal;

/// Arguments for the validation demos
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to load
    #[clap(short, long, default_value = "gallery")]
    pub fixture: String,
}

/// Trim a text field, returning it only when something remains.
pub(crate) fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();

    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse a text field as a strictly positive decimal.
pub(crate) fn parse_positive_decimal(raw: &str) -> Option<Decimal> {
    let value = Decimal::from_str(raw.trim()).ok()?;

    (value > Decimal::ZERO).then_some(value)
}

/// Parse a text field as a positive (`>= 1`) integer.
pub(crate) fn parse_positive_int(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<u32>().ok()?;

    (value >= 1).then_some(value)
}
