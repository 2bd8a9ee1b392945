//! Plain-text rendering of scheduler results.

use std::fmt::Write;

use dropday_schedule::{format_date, EarliestDelivery, Locale, SchedulerResult};

pub fn slots_table(result: &SchedulerResult) -> String {
    let mut out = String::new();
    if result.slots.is_empty() {
        let _ = writeln!(out, "No delivery dates within the search horizon for {}.", result.region);
        return out;
    }

    let _ = writeln!(out, "Delivery dates for {}:", result.region);
    for slot in &result.slots {
        let status = if slot.is_denied { "unavailable" } else { "available" };
        let _ = writeln!(out, "  {}  {:<24} {}", slot.date, slot.display_date, status);
    }
    out
}

pub fn earliest_line(found: Option<&EarliestDelivery>, locale: Locale) -> String {
    match found {
        Some(found) => format!(
            "{} ({}) via {} after {} cycle(s)",
            found.date,
            format_date(found.date, locale),
            found.zone,
            found.attempts
        ),
        None => "No delivery date found.".to_string(),
    }
}
