//! # Time-of-day conversion
//!
//! Schedule slots and query times are stored as minutes since midnight so that
//! availability checks reduce to integer comparisons. This module converts the
//! `"HH:MM"` strings accepted at the HTTP boundary into that encoding.

use crate::errors::{TutorError, TutorResult};

/// Number of minutes in one day; every valid minute offset is below this.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Converts an `"HH:MM"` time of day into minutes since midnight.
///
/// Both parts must be one or two ASCII digits, the hour in `0..=23` and the
/// minute in `0..=59`. Anything else is rejected with
/// [`TutorError::Validation`] instead of producing a meaningless offset.
///
/// # Example
///
/// ```
/// use tutorhub_core::time::hour_to_minutes;
///
/// assert_eq!(hour_to_minutes("08:00").unwrap(), 480);
/// assert_eq!(hour_to_minutes("23:59").unwrap(), 1439);
/// assert!(hour_to_minutes("8h").is_err());
/// ```
pub fn hour_to_minutes(time: &str) -> TutorResult<i32> {
    let invalid = || TutorError::validation(format!("Invalid time '{}': expected HH:MM", time));

    let (hour, minute) = time.split_once(':').ok_or_else(invalid)?;
    let hour = parse_component(hour).ok_or_else(invalid)?;
    let minute = parse_component(minute).ok_or_else(invalid)?;

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(hour * 60 + minute)
}

fn parse_component(part: &str) -> Option<i32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
