//! Error types for the scheduling engine and its upstream sources.

use dropday_core::CoreError;

/// Failure reading from a zone or denied-date source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Backend not reachable or refused the read.
    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while scheduling deliveries for a region.
///
/// Only [`NoZoneForRegion`](ScheduleError::NoZoneForRegion) and
/// [`ZoneLookupFailed`](ScheduleError::ZoneLookupFailed) abort a call. The
/// other variants are logged and the computation continues without the
/// offending input.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("No delivery zone configured for region {0}")]
    NoZoneForRegion(String),

    #[error("Zone lookup failed for region {region}: {source}")]
    ZoneLookupFailed {
        region: String,
        #[source]
        source: SourceError,
    },

    #[error("Denied date lookup failed: {0}")]
    DeniedDateLookupFailed(#[source] SourceError),

    #[error("Invalid zone rule for region {region}: {source}")]
    InvalidZone {
        region: String,
        #[source]
        source: CoreError,
    },
}
