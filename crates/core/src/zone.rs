//! Weekly shipping rules ("zones").

use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{weekday_from_index, weekday_index};
use crate::error::CoreError;

/// A zone rule exactly as the zone repository supplies it.
///
/// Nothing here is validated yet; convert with [`ZoneRule::try_from`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRuleRecord {
    /// Delivery region key, usually a postal code.
    pub region: String,
    /// Sunday-based weekday index on which orders for a cycle close.
    pub order_weekday: i64,
    /// Sunday-based weekday index on which the cycle is delivered.
    pub delivery_weekday: i64,
    /// Last time-of-day an order is accepted on `order_weekday`.
    pub cutoff: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A validated weekly delivery rule for one region.
///
/// Several rules may share a `region_key`; each is a separate delivery option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ZoneRuleRecord", into = "ZoneRuleRecord")]
pub struct ZoneRule {
    pub region_key: String,
    pub order_weekday: Weekday,
    pub delivery_weekday: Weekday,
    pub cutoff_time: NaiveTime,
    pub label: Option<String>,
}

impl ZoneRule {
    pub fn new(
        region: &str,
        order_weekday: Weekday,
        delivery_weekday: Weekday,
        cutoff_time: NaiveTime,
    ) -> Self {
        Self {
            region_key: normalize_region(region),
            order_weekday,
            delivery_weekday,
            cutoff_time,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl TryFrom<ZoneRuleRecord> for ZoneRule {
    type Error = CoreError;

    fn try_from(record: ZoneRuleRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            region_key: normalize_region(&record.region),
            order_weekday: weekday_from_index(record.order_weekday)?,
            delivery_weekday: weekday_from_index(record.delivery_weekday)?,
            cutoff_time: parse_cutoff(&record.cutoff)?,
            label: record.label,
        })
    }
}

impl From<ZoneRule> for ZoneRuleRecord {
    fn from(zone: ZoneRule) -> Self {
        Self {
            region: zone.region_key,
            order_weekday: i64::from(weekday_index(zone.order_weekday)),
            delivery_weekday: i64::from(weekday_index(zone.delivery_weekday)),
            cutoff: zone.cutoff_time.format("%H:%M:%S").to_string(),
            label: zone.label,
        }
    }
}

impl fmt::Display for ZoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} order {} by {} -> deliver {}",
            self.region_key,
            self.order_weekday,
            self.cutoff_time.format("%H:%M:%S"),
            self.delivery_weekday
        )?;
        if let Some(label) = &self.label {
            write!(f, " ({label})")?;
        }
        Ok(())
    }
}

/// Parse a cutoff time-of-day. Accepts `HH:MM:SS` and `HH:MM`.
pub fn parse_cutoff(raw: &str) -> Result<NaiveTime, CoreError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| CoreError::InvalidCutoffFormat(raw.to_string()))
}

/// Canonical form of a region key: whitespace removed, ASCII uppercased.
///
/// "1234 ab" and "1234AB" refer to the same region.
pub fn normalize_region(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(order: i64, delivery: i64, cutoff: &str) -> ZoneRuleRecord {
        ZoneRuleRecord {
            region: "1234 ab".to_string(),
            order_weekday: order,
            delivery_weekday: delivery,
            cutoff: cutoff.to_string(),
            label: None,
        }
    }

    #[test]
    fn record_converts_to_rule() {
        let zone = ZoneRule::try_from(record(2, 4, "14:00:00")).unwrap();
        assert_eq!(zone.region_key, "1234AB");
        assert_eq!(zone.order_weekday, Weekday::Tue);
        assert_eq!(zone.delivery_weekday, Weekday::Thu);
        assert_eq!(zone.cutoff_time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    }

    #[test]
    fn cutoff_without_seconds_accepted() {
        assert_eq!(
            parse_cutoff("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_cutoff(" 23:59:59 ").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
    }

    #[test]
    fn malformed_cutoff_rejected() {
        for raw in ["", "24:00:00", "14h00", "12:60", "noon"] {
            assert_eq!(
                parse_cutoff(raw),
                Err(CoreError::InvalidCutoffFormat(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn bad_weekday_rejected() {
        let err = ZoneRule::try_from(record(7, 4, "14:00:00")).unwrap_err();
        assert_eq!(err, CoreError::InvalidWeekday(7));
        let err = ZoneRule::try_from(record(2, -3, "14:00:00")).unwrap_err();
        assert_eq!(err, CoreError::InvalidWeekday(-3));
    }

    #[test]
    fn deserializes_from_yaml_shaped_json() {
        let zone: ZoneRule = serde_json::from_str(
            r#"{"region":"9999XX","order_weekday":0,"delivery_weekday":6,"cutoff":"08:15:00","label":"weekend"}"#,
        )
        .unwrap();
        assert_eq!(zone.order_weekday, Weekday::Sun);
        assert_eq!(zone.delivery_weekday, Weekday::Sat);
        assert_eq!(zone.label.as_deref(), Some("weekend"));

        let back = serde_json::to_value(&zone).unwrap();
        assert_eq!(back["order_weekday"], 0);
        assert_eq!(back["cutoff"], "08:15:00");
    }

    #[test]
    fn deserialize_rejects_invalid_record() {
        let res: Result<ZoneRule, _> = serde_json::from_str(
            r#"{"region":"1","order_weekday":2,"delivery_weekday":4,"cutoff":"late"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn normalize_region_strips_and_uppercases() {
        assert_eq!(normalize_region(" 1234 ab "), "1234AB");
        assert_eq!(normalize_region("sw1a 1aa"), "SW1A1AA");
    }
}
