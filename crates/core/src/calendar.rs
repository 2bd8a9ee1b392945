//! Weekday numbering and week boundaries.
//!
//! Every weekday index in this workspace uses 0 = Sunday … 6 = Saturday, and
//! every week starts on Sunday. Cutoff and offset arithmetic in the scheduler
//! is defined relative to this convention.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::CoreError;

/// Weekday for a Sunday-based index (0 = Sunday … 6 = Saturday).
pub fn weekday_from_index(index: i64) -> Result<Weekday, CoreError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(CoreError::InvalidWeekday(other)),
    }
}

/// Sunday-based index of a weekday.
pub fn weekday_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Number of days from `from` forward to the next `to` (0 when equal).
pub fn days_until(from: Weekday, to: Weekday) -> i64 {
    let from = i64::from(weekday_index(from));
    let to = i64::from(weekday_index(to));
    (to - from).rem_euclid(7)
}
