//! [`EarliestScheduler`]: soonest deliverable date across a region's zones.
//!
//! Each zone is searched on its own, skipping whole weekly cycles whose
//! delivery date is denied, up to a bounded number of attempts. The earliest
//! date found by any zone wins.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use dropday_core::calendar::days_until;
use dropday_core::config::SchedulingConfig;
use dropday_core::{DeniedDates, ZoneRule};

use crate::cutoff::can_order_for_week;
use crate::projector::project_delivery_date;

/// Soonest non-denied delivery date and the zone that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarliestDelivery {
    pub date: NaiveDate,
    pub zone: ZoneRule,
    /// Weekly cycles tried by the winning zone, including the successful one.
    pub attempts: u32,
}

/// Per-zone forward search bounded by `max_attempts` weekly cycles.
#[derive(Debug, Clone, Copy)]
pub struct EarliestScheduler {
    pub max_attempts: u32,
}

impl EarliestScheduler {
    pub fn new(config: &SchedulingConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
        }
    }

    /// Earliest delivery across `zones`, or `None` when no zone finds a
    /// non-denied date within its attempts. Ties go to the first zone.
    pub fn find_earliest_delivery(
        &self,
        zones: &[ZoneRule],
        denied: &DeniedDates,
        now: NaiveDateTime,
    ) -> Option<EarliestDelivery> {
        zones
            .iter()
            .filter_map(|zone| {
                let (date, attempts) = self.earliest_for_zone(zone, denied, now)?;
                Some(EarliestDelivery {
                    date,
                    zone: zone.clone(),
                    attempts,
                })
            })
            .min_by_key(|found| found.date)
    }

    /// Earliest non-denied delivery date for a single zone and the number of
    /// cycles it took to find it.
    pub fn earliest_for_zone(
        &self,
        zone: &ZoneRule,
        denied: &DeniedDates,
        now: NaiveDateTime,
    ) -> Option<(NaiveDate, u32)> {
        let mut check_date = now.date();

        for attempt in 1..=self.max_attempts {
            let order_date = next_order_date(check_date, zone, now, attempt == 1);
            let delivery = project_delivery_date(order_date, zone);
            if !denied.contains(delivery) {
                return Some((delivery, attempt));
            }
            debug!(zone = %zone, delivery = %delivery, attempt, "delivery date denied, trying next cycle");
            check_date = order_date + Duration::days(7);
        }

        debug!(zone = %zone, max_attempts = self.max_attempts, "no deliverable date found");
        None
    }
}

impl Default for EarliestScheduler {
    fn default() -> Self {
        Self::new(&SchedulingConfig::default())
    }
}

/// Next occurrence of the zone's order weekday on or after `from`.
///
/// When that occurrence is today it only counts on the first attempt and only
/// while the cutoff still holds; otherwise the following week's is used.
fn next_order_date(from: NaiveDate, zone: &ZoneRule, now: NaiveDateTime, first_attempt: bool) -> NaiveDate {
    let candidate = from + Duration::days(days_until(from.weekday(), zone.order_weekday));
    if candidate == now.date() {
        let open = first_attempt && can_order_for_week(candidate, zone, now).is_open();
        if !open {
            return candidate + Duration::days(7);
        }
    }
    candidate
}
