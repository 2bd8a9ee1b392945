//! Order date → delivery date projection.

use chrono::{Datelike, Duration, NaiveDate};

use dropday_core::calendar::{days_until, weekday_index};
use dropday_core::ZoneRule;

/// Delivery date for an order placed on `order_date` under `zone`.
///
/// Moves forward to the zone's delivery weekday. A zero offset means same-day
/// delivery only when the zone delivers on its own order weekday; otherwise
/// the delivery rolls to the following week. The result is never before
/// `order_date`.
pub fn project_delivery_date(order_date: NaiveDate, zone: &ZoneRule) -> NaiveDate {
    let mut offset = days_until(order_date.weekday(), zone.delivery_weekday);
    if offset == 0 && zone.delivery_weekday != zone.order_weekday {
        offset = 7;
    }
    order_date + Duration::days(offset)
}

/// The zone's order date inside the week beginning on `week_start` (a Sunday).
pub(crate) fn order_date_in_week(week_start: NaiveDate, zone: &ZoneRule) -> NaiveDate {
    week_start + Duration::days(i64::from(weekday_index(zone.order_weekday)))
}
