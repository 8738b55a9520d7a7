//! Duration calculations

use chrono::NaiveTime;

/// Hours between two same-day wall-clock times.
///
/// Non-positive differences count as zero: stored spans are never validated
/// here and must not pull totals below zero.
pub fn duration_hours(from: NaiveTime, to: NaiveTime) -> f64 {
    let minutes = to.signed_duration_since(from).num_minutes();
    if minutes <= 0 {
        0.0
    } else {
        minutes as f64 / 60.0
    }
}

/// Round to one decimal, halves away from zero
pub fn round_hours(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}
