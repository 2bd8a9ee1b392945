//! [`BoundedScheduler`]: the date-picker search across every zone of a region.
//!
//! Projects each zone over a fixed horizon of weekly cycles, merges the
//! candidates chronologically, and stops once enough available dates have been
//! collected. Denied dates met before that point stay in the result so the
//! picker can show them crossed out.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use dropday_core::calendar::start_of_week;
use dropday_core::config::SchedulingConfig;
use dropday_core::{DeniedDates, ZoneRule};

use crate::cutoff::{can_order_for_week, OrderWindow};
use crate::display::{format_date, Locale};
use crate::error::ScheduleError;
use crate::projector::{order_date_in_week, project_delivery_date};

/// A projected delivery date for one zone and weekly cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub date: NaiveDate,
    pub zone: &'a ZoneRule,
    pub is_denied: bool,
}

/// One entry of the date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySlot {
    pub date: NaiveDate,
    pub display_date: String,
    pub is_available: bool,
    pub is_denied: bool,
}

impl DeliverySlot {
    fn new(date: NaiveDate, is_denied: bool, locale: Locale) -> Self {
        Self {
            date,
            display_date: format_date(date, locale),
            is_available: !is_denied,
            is_denied,
        }
    }
}

/// Ordered, deduplicated picker entries for a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerResult {
    pub region: String,
    pub slots: Vec<DeliverySlot>,
}

impl SchedulerResult {
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_available).count()
    }

    pub fn available_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.slots.iter().filter(|s| s.is_available).map(|s| s.date)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Multi-zone scheduler over a bounded weekly horizon.
#[derive(Debug, Clone, Copy)]
pub struct BoundedScheduler {
    pub horizon_weeks: u32,
    pub result_count: u32,
    pub locale: Locale,
}

impl BoundedScheduler {
    pub fn new(config: &SchedulingConfig, locale: Locale) -> Self {
        Self {
            horizon_weeks: config.horizon_weeks,
            result_count: config.result_count,
            locale,
        }
    }

    /// Picker entries for `region` from validated `zones`.
    ///
    /// Fails with [`ScheduleError::NoZoneForRegion`] when `zones` is empty.
    pub fn find_available_dates(
        &self,
        region: &str,
        zones: &[ZoneRule],
        denied: &DeniedDates,
        now: NaiveDateTime,
    ) -> Result<SchedulerResult, ScheduleError> {
        if zones.is_empty() {
            return Err(ScheduleError::NoZoneForRegion(region.to_string()));
        }

        let mut candidates = collect_candidates(zones, denied, now, self.horizon_weeks);
        // Stable: equal dates keep zone order.
        candidates.sort_by_key(|c| c.date);

        let slots = select_slots(candidates, self.result_count, self.locale);
        debug!(
            region = %region,
            zones = zones.len(),
            slots = slots.len(),
            "bounded search complete"
        );
        Ok(SchedulerResult {
            region: region.to_string(),
            slots,
        })
    }
}

impl Default for BoundedScheduler {
    fn default() -> Self {
        Self::new(&SchedulingConfig::default(), Locale::default())
    }
}

/// Project every zone over `horizon_weeks` weekly cycles starting with the
/// current week. Closed cycles and dates before today are dropped.
pub fn collect_candidates<'a>(
    zones: &'a [ZoneRule],
    denied: &DeniedDates,
    now: NaiveDateTime,
    horizon_weeks: u32,
) -> Vec<Candidate<'a>> {
    let today = now.date();
    let current_week = start_of_week(today);
    let mut candidates = Vec::new();

    for zone in zones {
        for week in 0..horizon_weeks {
            let week_start = current_week + Duration::weeks(i64::from(week));
            if let OrderWindow::Closed(reason) = can_order_for_week(week_start, zone, now) {
                debug!(zone = %zone, week_start = %week_start, reason = %reason, "cycle closed");
                continue;
            }

            let date = project_delivery_date(order_date_in_week(week_start, zone), zone);
            if date < today {
                continue;
            }
            candidates.push(Candidate {
                date,
                zone,
                is_denied: denied.contains(date),
            });
        }
    }

    candidates
}

/// Walk chronologically sorted candidates, keeping the first occurrence of
/// each date, until `result_count` available dates have been appended.
pub fn select_slots(candidates: Vec<Candidate<'_>>, result_count: u32, locale: Locale) -> Vec<DeliverySlot> {
    let mut slots = Vec::new();
    if result_count == 0 {
        return slots;
    }

    let mut seen = HashSet::new();
    let mut available = 0u32;
    for candidate in candidates {
        if !seen.insert(candidate.date) {
            continue;
        }
        slots.push(DeliverySlot::new(candidate.date, candidate.is_denied, locale));
        if !candidate.is_denied {
            available += 1;
            if available >= result_count {
                break;
            }
        }
    }
    slots
}
