//! Upstream collaborators: where zone rules and denied dates come from.

use std::sync::Arc;

use async_trait::async_trait;

use dropday_core::{normalize_region, ZoneRuleRecord};

use crate::error::SourceError;

/// Supplies the zone rules configured for a region.
#[async_trait]
pub trait ZoneRuleSource: Send + Sync {
    /// All records whose region matches `region` (already normalized).
    ///
    /// Returns an empty vec when the region has no rules.
    async fn zones_for_region(&self, region: &str) -> Result<Vec<ZoneRuleRecord>, SourceError>;
}

/// Supplies the globally denied delivery dates as `YYYY-MM-DD` strings.
#[async_trait]
pub trait DeniedDateSource: Send + Sync {
    async fn denied_dates(&self) -> Result<Vec<String>, SourceError>;
}

#[async_trait]
impl<T: ZoneRuleSource + ?Sized> ZoneRuleSource for Arc<T> {
    async fn zones_for_region(&self, region: &str) -> Result<Vec<ZoneRuleRecord>, SourceError> {
        (**self).zones_for_region(region).await
    }
}

#[async_trait]
impl<T: DeniedDateSource + ?Sized> DeniedDateSource for Arc<T> {
    async fn denied_dates(&self) -> Result<Vec<String>, SourceError> {
        (**self).denied_dates().await
    }
}

/// Fixed in-memory zone rules and denied dates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    zones: Vec<ZoneRuleRecord>,
    denied: Vec<String>,
}

impl InMemoryStore {
    pub fn new(zones: Vec<ZoneRuleRecord>, denied: Vec<String>) -> Self {
        Self { zones, denied }
    }

    pub fn with_zone(mut self, zone: ZoneRuleRecord) -> Self {
        self.zones.push(zone);
        self
    }

    pub fn with_denied(mut self, date: impl Into<String>) -> Self {
        self.denied.push(date.into());
        self
    }
}

/// Records in `zones` whose normalized region equals `region`, in file order.
pub(crate) fn matching_region(zones: &[ZoneRuleRecord], region: &str) -> Vec<ZoneRuleRecord> {
    let wanted = normalize_region(region);
    zones
        .iter()
        .filter(|z| normalize_region(&z.region) == wanted)
        .cloned()
        .collect()
}

#[async_trait]
impl ZoneRuleSource for InMemoryStore {
    async fn zones_for_region(&self, region: &str) -> Result<Vec<ZoneRuleRecord>, SourceError> {
        Ok(matching_region(&self.zones, region))
    }
}

#[async_trait]
impl DeniedDateSource for InMemoryStore {
    async fn denied_dates(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.denied.clone())
    }
}
