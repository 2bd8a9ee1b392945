use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub scheduling: SchedulingConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `DROPDAY_PROFILE`. When set (e.g. `STAGING`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("DROPDAY_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            scheduling: SchedulingConfig::from_env_profiled(p),
            catalog: CatalogConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  scheduling:  horizon_weeks={}, result_count={}, max_attempts={}",
            self.scheduling.horizon_weeks,
            self.scheduling.result_count,
            self.scheduling.max_attempts
        );
        tracing::info!(
            "  catalog:     path={}, locale={}",
            self.catalog.path.display(),
            self.catalog.locale
        );
    }
}

// ── Scheduling ────────────────────────────────────────────────

/// Search bounds for both schedulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Weeks searched forward by the bounded multi-zone scheduler.
    pub horizon_weeks: u32,
    /// Number of available dates after which the bounded search stops.
    pub result_count: u32,
    /// Weekly cycles tried per zone by the earliest-date scheduler.
    pub max_attempts: u32,
}

impl SchedulingConfig {
    pub const DEFAULT_HORIZON_WEEKS: u32 = 4;
    pub const DEFAULT_RESULT_COUNT: u32 = 3;
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 52;

    fn from_env_profiled(p: &str) -> Self {
        Self {
            horizon_weeks: profiled_env_u32(p, "HORIZON_WEEKS", Self::DEFAULT_HORIZON_WEEKS),
            result_count: profiled_env_u32(p, "RESULT_COUNT", Self::DEFAULT_RESULT_COUNT),
            max_attempts: profiled_env_u32(p, "MAX_ATTEMPTS", Self::DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            horizon_weeks: Self::DEFAULT_HORIZON_WEEKS,
            result_count: Self::DEFAULT_RESULT_COUNT,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

// ── Catalog ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// YAML file holding zone rules and denied dates.
    pub path: PathBuf,
    /// Language for display dates and notices ("en", "nl", "de").
    pub locale: String,
}

impl CatalogConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            path: PathBuf::from(profiled_env_or(p, "CATALOG_PATH", "data/delivery.yml")),
            locale: profiled_env_or(p, "LOCALE", "en"),
        }
    }
}
