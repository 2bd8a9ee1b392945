//! Whether an order placed "now" still makes a given week's cycle.
//!
//! [`can_order_for_week`] is the single definition of "too late to order"
//! used by both schedulers.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use dropday_core::calendar::{start_of_week, weekday_index};
use dropday_core::ZoneRule;

/// Why a week's ordering cycle is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClosedReason {
    /// Current week, and this zone's order weekday has already passed.
    PastDeadline,
    /// Current week, today is the order weekday, but after the cutoff time.
    PastCutoff,
    /// The week lies entirely before the current week.
    PastWeek,
}

impl fmt::Display for ClosedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosedReason::PastDeadline => write!(f, "PastDeadline"),
            ClosedReason::PastCutoff => write!(f, "PastCutoff"),
            ClosedReason::PastWeek => write!(f, "PastWeek"),
        }
    }
}

/// Outcome of a cutoff evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderWindow {
    Open,
    Closed(ClosedReason),
}

impl OrderWindow {
    pub fn is_open(self) -> bool {
        matches!(self, OrderWindow::Open)
    }

    pub fn reason(self) -> Option<ClosedReason> {
        match self {
            OrderWindow::Open => None,
            OrderWindow::Closed(reason) => Some(reason),
        }
    }
}

/// Decide whether an order placed at `now` lands in the cycle of the week
/// starting at `week_start`.
///
/// `week_start` is snapped to its Sunday. Future weeks are always open; past
/// weeks are always closed. For the current week the zone's order weekday and
/// cutoff time decide; an order placed exactly at the cutoff is accepted.
pub fn can_order_for_week(week_start: NaiveDate, zone: &ZoneRule, now: NaiveDateTime) -> OrderWindow {
    let week_start = start_of_week(week_start);
    let current_week = start_of_week(now.date());

    match week_start.cmp(&current_week) {
        Ordering::Greater => OrderWindow::Open,
        Ordering::Less => OrderWindow::Closed(ClosedReason::PastWeek),
        Ordering::Equal => {
            let today = weekday_index(now.weekday());
            let order_day = weekday_index(zone.order_weekday);
            match today.cmp(&order_day) {
                Ordering::Less => OrderWindow::Open,
                Ordering::Greater => OrderWindow::Closed(ClosedReason::PastDeadline),
                Ordering::Equal if now.time() <= zone.cutoff_time => OrderWindow::Open,
                Ordering::Equal => OrderWindow::Closed(ClosedReason::PastCutoff),
            }
        }
    }
}
