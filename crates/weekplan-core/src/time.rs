//! Wall-clock time arithmetic.
//!
//! Converts between user-facing time strings ("07:30", "7:30", "7") and
//! minutes since midnight. Placement works on minute-of-day integers
//! throughout; strings only appear at the edges.

use crate::error::TimeError;

/// Minutes in a full day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a time string into minutes since midnight.
///
/// Accepts "H", "HH", "H:MM", and "HH:MM"; surrounding whitespace is
/// ignored. A bare hour means the top of that hour.
pub fn parse_time(s: &str) -> Result<u32, TimeError> {
    let trimmed = s.trim();

    let (hour, minute) = match trimmed.split_once(':') {
        Some((h, m)) => {
            if m.contains(':') {
                return Err(TimeError::InvalidFormat(s.to_string()));
            }
            let hour = h
                .parse::<u32>()
                .map_err(|_| TimeError::InvalidFormat(s.to_string()))?;
            let minute = m
                .parse::<u32>()
                .map_err(|_| TimeError::InvalidFormat(s.to_string()))?;
            (hour, minute)
        }
        None => {
            let hour = trimmed
                .parse::<u32>()
                .map_err(|_| TimeError::InvalidFormat(s.to_string()))?;
            (hour, 0)
        }
    };

    if hour > 23 || minute > 59 {
        return Err(TimeError::OutOfRange(s.to_string()));
    }

    Ok(hour * 60 + minute)
}

/// Format minutes since midnight as zero-padded "HH:MM".
///
/// No wrapping is applied: the caller keeps display values below 1440,
/// while intermediate arithmetic past midnight formats as "24:30" etc.
pub fn format_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
