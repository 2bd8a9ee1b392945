//! Globally denied delivery dates.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CoreError;

/// Snapshot of calendar dates on which no zone delivers.
///
/// Membership is exact calendar-date equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeniedDates(BTreeSet<NaiveDate>);

impl DeniedDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `YYYY-MM-DD` strings, skipping malformed entries.
    pub fn parse_lossy<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dates = BTreeSet::new();
        for entry in raw {
            match parse_date(entry.as_ref()) {
                Ok(date) => {
                    dates.insert(date);
                }
                Err(e) => warn!(error = %e, "skipping malformed denied date"),
            }
        }
        Self(dates)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.0.insert(date)
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<NaiveDate> for DeniedDates {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(raw.to_string()))
}
