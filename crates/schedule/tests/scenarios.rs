//! End-to-end scheduling scenarios and the properties both schedulers must
//! hold for any input.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use dropday_core::calendar::weekday_from_index;
use dropday_core::{DeniedDates, ZoneRule};
use dropday_schedule::{BoundedScheduler, EarliestScheduler, Locale};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn zone(order: Weekday, delivery: Weekday, cutoff: &str) -> ZoneRule {
    ZoneRule::new(
        "1234AB",
        order,
        delivery,
        NaiveTime::parse_from_str(cutoff, "%H:%M:%S").unwrap(),
    )
}

fn tue_thu() -> ZoneRule {
    zone(Weekday::Tue, Weekday::Thu, "14:00:00")
}

fn denied(dates: &[NaiveDate]) -> DeniedDates {
    dates.iter().copied().collect()
}

// ── Earliest mode ───────────────────────────────────────────

#[test]
fn scenario_a_current_week_before_cutoff() {
    let found = EarliestScheduler::default()
        .find_earliest_delivery(&[tue_thu()], &DeniedDates::new(), at(2024, 5, 6, 10, 0))
        .unwrap();
    assert_eq!(found.date, date(2024, 5, 9));
    assert_eq!(found.zone, tue_thu());
}

#[test]
fn scenario_b_current_week_past_cutoff() {
    let found = EarliestScheduler::default()
        .find_earliest_delivery(&[tue_thu()], &DeniedDates::new(), at(2024, 5, 7, 15, 0))
        .unwrap();
    assert_eq!(found.date, date(2024, 5, 16));
}

#[test]
fn scenario_c_denied_date_skips_cycle() {
    let found = EarliestScheduler::default()
        .find_earliest_delivery(&[tue_thu()], &denied(&[date(2024, 5, 9)]), at(2024, 5, 6, 10, 0))
        .unwrap();
    assert_eq!(found.date, date(2024, 5, 16));
    assert_eq!(found.attempts, 2);
}

// ── Bounded mode ────────────────────────────────────────────

#[test]
fn scenario_d_shared_delivery_date_listed_once() {
    let zones = vec![tue_thu(), zone(Weekday::Mon, Weekday::Thu, "12:00:00")];
    let result = BoundedScheduler::default()
        .find_available_dates("1234AB", &zones, &DeniedDates::new(), at(2024, 5, 6, 10, 0))
        .unwrap();
    let dates: Vec<_> = result.slots.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![date(2024, 5, 9), date(2024, 5, 16), date(2024, 5, 23)]);
}

#[test]
fn scenario_e_stop_on_third_available() {
    // Thursdays: 9, 16, 23, 30 May. Saturdays: 11, 18, 25 May, 1 June.
    let zones = vec![tue_thu(), zone(Weekday::Mon, Weekday::Sat, "18:00:00")];
    let blocked = denied(&[date(2024, 5, 9), date(2024, 5, 16), date(2024, 5, 25)]);
    let result = BoundedScheduler::default()
        .find_available_dates("1234AB", &zones, &blocked, at(2024, 5, 6, 10, 0))
        .unwrap();

    let got: Vec<_> = result
        .slots
        .iter()
        .map(|s| (s.date, s.is_available, s.is_denied))
        .collect();
    assert_eq!(
        got,
        vec![
            (date(2024, 5, 9), false, true),
            (date(2024, 5, 11), true, false),
            (date(2024, 5, 16), false, true),
            (date(2024, 5, 18), true, false),
            (date(2024, 5, 23), true, false),
        ]
    );
    assert_eq!(result.available_count(), 3);
}

#[test]
fn denied_dates_after_last_available_are_not_listed() {
    let blocked = denied(&[date(2024, 5, 30)]);
    let result = BoundedScheduler::default()
        .find_available_dates("1234AB", &[tue_thu()], &blocked, at(2024, 5, 6, 10, 0))
        .unwrap();
    assert_eq!(result.slots.len(), 3);
    assert!(result.slots.iter().all(|s| !s.is_denied));
}

#[test]
fn all_denied_horizon_lists_every_denied_date() {
    let blocked = denied(&[date(2024, 5, 9), date(2024, 5, 16), date(2024, 5, 23), date(2024, 5, 30)]);
    let result = BoundedScheduler::default()
        .find_available_dates("1234AB", &[tue_thu()], &blocked, at(2024, 5, 6, 10, 0))
        .unwrap();
    assert_eq!(result.slots.len(), 4);
    assert_eq!(result.available_count(), 0);
}

#[test]
fn sunday_delivery_across_week_boundary() {
    // Saturday order, Sunday delivery, placed on the Saturday itself.
    let zones = vec![zone(Weekday::Sat, Weekday::Sun, "20:00:00")];
    let result = BoundedScheduler::default()
        .find_available_dates("1234AB", &zones, &DeniedDates::new(), at(2024, 5, 11, 19, 0))
        .unwrap();
    let dates: Vec<_> = result.available_dates().collect();
    assert_eq!(dates, vec![date(2024, 5, 12), date(2024, 5, 19), date(2024, 5, 26)]);
}

// ── Properties over a sweep of inputs ───────────────────────

fn every_zone() -> Vec<ZoneRule> {
    let mut zones = Vec::new();
    for o in 0..7 {
        for d in 0..7 {
            zones.push(zone(
                weekday_from_index(o).unwrap(),
                weekday_from_index(d).unwrap(),
                "13:30:00",
            ));
        }
    }
    zones
}

fn sweep_instants() -> Vec<NaiveDateTime> {
    let start = at(2024, 12, 22, 0, 15);
    (0..(14 * 24 / 5)).map(|i| start + Duration::hours(i * 5)).collect()
}

fn sweep_denied() -> DeniedDates {
    let start = date(2024, 12, 20);
    (0..60).step_by(3).map(|i| start + Duration::days(i)).collect()
}

#[test]
fn bounded_results_hold_invariants() {
    let zones = every_zone();
    let blocked = sweep_denied();
    let scheduler = BoundedScheduler {
        horizon_weeks: 4,
        result_count: 3,
        locale: Locale::En,
    };

    for now in sweep_instants() {
        for window in zones.chunks(5) {
            let result = scheduler
                .find_available_dates("1234AB", window, &blocked, now)
                .unwrap();

            let mut seen = HashSet::new();
            for pair in result.slots.windows(2) {
                assert!(pair[0].date < pair[1].date, "not ascending at {now}");
            }
            for slot in &result.slots {
                assert!(seen.insert(slot.date), "duplicate {} at {now}", slot.date);
                assert!(slot.date >= now.date(), "past date {} at {now}", slot.date);
                assert_eq!(slot.is_denied, blocked.contains(slot.date));
                assert_eq!(slot.is_available, !slot.is_denied);
            }
            assert!(result.available_count() <= 3);

            let again = scheduler
                .find_available_dates("1234AB", window, &blocked, now)
                .unwrap();
            assert_eq!(result, again);
        }
    }
}

#[test]
fn earliest_results_hold_invariants() {
    let zones = every_zone();
    let blocked = sweep_denied();
    let scheduler = EarliestScheduler::default();

    for now in sweep_instants() {
        for window in zones.chunks(5) {
            let found = scheduler
                .find_earliest_delivery(window, &blocked, now)
                .expect("52 weekly cycles cannot all be denied here");
            assert!(found.date >= now.date());
            assert!(!blocked.contains(found.date));
            assert!(window.contains(&found.zone));

            let again = scheduler.find_earliest_delivery(window, &blocked, now);
            assert_eq!(Some(found), again);
        }
    }
}

#[test]
fn earliest_never_later_than_first_bounded_available() {
    let zones = every_zone();
    let blocked = sweep_denied();

    for now in sweep_instants() {
        for window in zones.chunks(7) {
            let bounded = BoundedScheduler::default()
                .find_available_dates("1234AB", window, &blocked, now)
                .unwrap();
            let earliest = EarliestScheduler::default()
                .find_earliest_delivery(window, &blocked, now)
                .unwrap();
            if let Some(first) = bounded.available_dates().next() {
                assert!(earliest.date <= first, "earliest {} > picker {} at {now}", earliest.date, first);
            };
        }
    }
}
