//! [`DeliveryPlanner`]: fetches one snapshot of the upstream inputs and runs a
//! scheduler over it.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use dropday_core::config::SchedulingConfig;
use dropday_core::{normalize_region, Clock, DeniedDates, ZoneRule, ZoneRuleRecord};

use crate::bounded::{BoundedScheduler, SchedulerResult};
use crate::display::Locale;
use crate::earliest::{EarliestDelivery, EarliestScheduler};
use crate::error::ScheduleError;
use crate::source::{DeniedDateSource, ZoneRuleSource};

/// Inputs for one scheduling call, read once up front.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub region: String,
    pub zones: Vec<ZoneRule>,
    pub denied: DeniedDates,
    pub now: NaiveDateTime,
}

/// Entry point used by request handlers and the notice job.
///
/// Holds no scheduling state between calls; every call re-reads both sources
/// and the clock.
pub struct DeliveryPlanner<Z, D, C> {
    zones: Z,
    denied: D,
    clock: C,
    config: SchedulingConfig,
    locale: Locale,
}

impl<Z, D, C> DeliveryPlanner<Z, D, C>
where
    Z: ZoneRuleSource,
    D: DeniedDateSource,
    C: Clock,
{
    pub fn new(zones: Z, denied: D, clock: C) -> Self {
        Self {
            zones,
            denied,
            clock,
            config: SchedulingConfig::default(),
            locale: Locale::default(),
        }
    }

    pub fn with_config(mut self, config: SchedulingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    /// Read zone rules and denied dates concurrently, then the clock.
    ///
    /// A failed denied-date read degrades to an empty set; a failed zone read
    /// aborts. Malformed zone records are dropped.
    pub async fn snapshot(&self, region: &str) -> Result<Snapshot, ScheduleError> {
        let region = normalize_region(region);
        let (zones, denied) = tokio::join!(
            self.zones.zones_for_region(&region),
            self.denied.denied_dates()
        );

        let records = zones.map_err(|source| ScheduleError::ZoneLookupFailed {
            region: region.clone(),
            source,
        })?;

        let denied = match denied {
            Ok(raw) => DeniedDates::parse_lossy(raw),
            Err(e) => {
                let err = ScheduleError::DeniedDateLookupFailed(e);
                warn!(region = %region, error = %err, "continuing without denied dates");
                DeniedDates::new()
            }
        };

        let zones = validate_zones(&region, records);
        Ok(Snapshot {
            region,
            zones,
            denied,
            now: self.clock.now(),
        })
    }

    /// Date-picker entries for `region`.
    pub async fn available_dates(&self, region: &str) -> Result<SchedulerResult, ScheduleError> {
        let snap = self.snapshot(region).await?;
        BoundedScheduler::new(&self.config, self.locale).find_available_dates(
            &snap.region,
            &snap.zones,
            &snap.denied,
            snap.now,
        )
    }

    /// Soonest deliverable date for `region`, or `None` when nothing was found
    /// (including regions without zones).
    pub async fn earliest_delivery(&self, region: &str) -> Result<Option<EarliestDelivery>, ScheduleError> {
        let snap = self.snapshot(region).await?;
        if snap.zones.is_empty() {
            debug!(region = %snap.region, "no zones for region, no earliest delivery");
            return Ok(None);
        }
        Ok(EarliestScheduler::new(&self.config).find_earliest_delivery(&snap.zones, &snap.denied, snap.now))
    }
}

/// Convert raw records, skipping and logging any that fail validation.
pub fn validate_zones(region: &str, records: Vec<ZoneRuleRecord>) -> Vec<ZoneRule> {
    records
        .into_iter()
        .filter_map(|record| match ZoneRule::try_from(record) {
            Ok(zone) => Some(zone),
            Err(source) => {
                let err = ScheduleError::InvalidZone {
                    region: region.to_string(),
                    source,
                };
                warn!(error = %err, "skipping zone rule");
                None
            }
        })
        .collect()
}
