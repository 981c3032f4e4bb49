//! Duration calculation between two same-day clock times

use chrono::NaiveTime;

use crate::format::round_to;

/// Clock format used by run logs.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Parse an `HH:MM` clock time.
///
/// Returns `None` when the value is not a valid hour:minute time.
#[must_use]
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT).ok()
}

/// Elapsed hours from `start` to `end`, rounded to two decimals.
///
/// Both times are taken to lie on the same calendar day. There is no
/// rollover: an `end` earlier than `start` yields a negative duration.
///
/// ```rust
/// use degradation_ledger::runs::{elapsed_hours, parse_clock};
///
/// let start = parse_clock("14:18").unwrap();
/// let end = parse_clock("21:35").unwrap();
/// assert!((elapsed_hours(start, end) - 7.28).abs() < 1e-9);
/// assert!((elapsed_hours(end, start) + 7.28).abs() < 1e-9);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn elapsed_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let seconds = end.signed_duration_since(start).num_seconds();
    round_to(seconds as f64 / 3600.0, 2)
}
