//! YAML-file catalog backing both sources.
//!
//! ```yaml
//! zones:
//!   - region: "1234AB"
//!     order_weekday: 2      # 0 = Sunday
//!     delivery_weekday: 4
//!     cutoff: "14:00:00"
//! denied_dates:
//!   - "2024-12-25"
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use dropday_core::ZoneRuleRecord;

use crate::error::SourceError;
use crate::source::{matching_region, DeniedDateSource, ZoneRuleSource};

/// On-disk layout of a delivery catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub zones: Vec<ZoneRuleRecord>,
    #[serde(default)]
    pub denied_dates: Vec<String>,
}

impl CatalogFile {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SourceError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Catalog read from a YAML file on every lookup, so edits are picked up by
/// the next call without a reload step.
#[derive(Debug, Clone)]
pub struct YamlCatalog {
    path: PathBuf,
}

impl YamlCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<CatalogFile, SourceError> {
        let yaml = tokio::fs::read_to_string(&self.path).await?;
        let catalog = CatalogFile::from_yaml_str(&yaml)?;
        debug!(
            path = %self.path.display(),
            zones = catalog.zones.len(),
            denied = catalog.denied_dates.len(),
            "loaded delivery catalog"
        );
        Ok(catalog)
    }
}

#[async_trait]
impl ZoneRuleSource for YamlCatalog {
    async fn zones_for_region(&self, region: &str) -> Result<Vec<ZoneRuleRecord>, SourceError> {
        let catalog = self.load().await?;
        Ok(matching_region(&catalog.zones, region))
    }
}

#[async_trait]
impl DeniedDateSource for YamlCatalog {
    async fn denied_dates(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.load().await?.denied_dates)
    }
}
