//! Pure display-formatting helpers: currency, dates, invoice numbers.
//!
//! Everything here is referentially transparent; no clocks, no locale
//! lookup, no persisted state.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A date-bearing input: a calendar date or a date with time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    /// A plain calendar date; formats as midnight when a time is needed.
    Date(NaiveDate),
    /// A date with time-of-day.
    DateTime(NaiveDateTime),
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl DateInput {
    /// Parse an ISO date (`2024-03-05`) or datetime (`2024-03-01T09:30:00`,
    /// optional fractional seconds).
    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Self::DateTime(dt));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self::Date)
    }

    fn as_datetime(self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::DateTime(dt) => dt,
        }
    }
}

/// Render an amount as `$1,234.57`: two decimals, thousands grouping,
/// half-away-from-zero rounding. Negatives carry the sign in front of the
/// whole token: `-$0.99`.
pub fn format_currency(amount: f64) -> String {
    // f64::round is half-away-from-zero, matching the display contract.
    let cents = (amount.abs() * 100.0).round() as u128;
    let dollars = group_thousands(cents / 100);
    let fraction = cents % 100;
    // A value that rounds to zero drops its sign: "-$0.00" never renders.
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${dollars}.{fraction:02}")
}

/// Insert `,` separators every three digits: `1234567` -> `"1,234,567"`.
fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a date as `March 5, 2024` (full month name, day without padding).
pub fn format_date(input: impl Into<DateInput>) -> String {
    let dt = input.into().as_datetime();
    dt.format("%B %-d, %Y").to_string()
}

/// Render a date-time as `March 1, 2024, 09:30 AM`.
///
/// The hour is 12-hour and zero-padded; hour 0 renders as `12 AM`, hour 12
/// as `12 PM`. Date-only inputs render as midnight.
pub fn format_date_time(input: impl Into<DateInput>) -> String {
    let dt = input.into().as_datetime();
    dt.format("%B %-d, %Y, %I:%M %p").to_string()
}

/// Invoice number shape: `prefix` + zero-padded sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceNumberConfig {
    /// Literal prefix, e.g. `INV-`.
    pub prefix: String,
    /// Minimum digit width; shorter sequences are zero-padded.
    pub pad: usize,
}

/// Format the next invoice number after `last_sequence`.
///
/// Purely a string formatter: the caller owns allocating and persisting the
/// sequence.
pub fn generate_invoice_number(last_sequence: u64, config: &InvoiceNumberConfig) -> String {
    format!(
        "{}{:0width$}",
        config.prefix,
        last_sequence + 1,
        width = config.pad
    )
}
