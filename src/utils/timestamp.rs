use crate::utils::constants::TIMESTAMP_FORMATS;
use chrono::{DateTime, NaiveDateTime};

/// Parse a fix timestamp in Movebank (`2024-01-01 00:00:00.000`) or RFC 3339 form
///
/// Offsets are normalised to UTC. Returns `None` when no format matches.
///
/// # Examples
/// ```
/// use birdtrack_cleaner::utils::parse_timestamp;
///
/// let a = parse_timestamp("2024-01-01 06:30:00.000").unwrap();
/// let b = parse_timestamp("2024-01-01T08:30:00+02:00").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}
