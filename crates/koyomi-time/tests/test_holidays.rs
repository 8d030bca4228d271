//! Holiday computation checked against published Japanese holiday lists.
//!
//! The lists below cover the national holidays this crate models; substitute
//! holidays (振替休日) and citizens' holidays (国民の休日) are not included.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use koyomi_core::Locale;
use koyomi_time::date::nth_weekday;
use koyomi_time::holiday::{autumnal_equinox, vernal_equinox, EQUINOX_FORMULA_YEARS};
use koyomi_time::{compute_holidays, HolidayCalculator, Month, NationalHoliday, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Assert that the computed holidays of `year` are exactly `expected`.
fn check_holidays(year: i32, expected: &[(u32, u32)]) {
    let calculated: HashSet<NaiveDate> = compute_holidays(year).iter().map(|h| h.date).collect();
    let exp_set: HashSet<NaiveDate> = expected.iter().map(|&(m, d)| date(year, m, d)).collect();

    for d in &calculated {
        assert!(exp_set.contains(d), "{d} calculated as holiday but not expected");
    }
    for d in &exp_set {
        assert!(calculated.contains(d), "{d} expected as holiday but not found");
    }
}

// ─── Known years ──────────────────────────────────────────────────────────────

#[test]
fn holidays_2024() {
    check_holidays(
        2024,
        &[
            (1, 1),
            (1, 8),
            (2, 11),
            (2, 23),
            (3, 20),
            (4, 29),
            (5, 3),
            (5, 4),
            (5, 5),
            (7, 15),
            (8, 11),
            (9, 16),
            (9, 22),
            (10, 14),
            (11, 3),
            (11, 23),
        ],
    );
}

#[test]
fn holidays_2025() {
    check_holidays(
        2025,
        &[
            (1, 1),
            (1, 13),
            (2, 11),
            (2, 23),
            (3, 20),
            (4, 29),
            (5, 3),
            (5, 4),
            (5, 5),
            (7, 21),
            (8, 11),
            (9, 15),
            (9, 23),
            (10, 13),
            (11, 3),
            (11, 23),
        ],
    );
}

#[test]
fn names_2025() {
    let en = HolidayCalculator::with_locale(Locale::En).holidays(2025);
    let find = |d: NaiveDate| en.iter().find(|h| h.date == d).map(|h| h.name);
    assert_eq!(find(date(2025, 1, 1)), Some("New Year's Day"));
    assert_eq!(find(date(2025, 11, 3)), Some("Culture Day"));
    assert_eq!(find(date(2025, 3, 20)), Some("Vernal Equinox Day"));

    let ja = compute_holidays(2025);
    let names: Vec<&str> = ja.iter().map(|h| h.name).collect();
    assert!(names.contains(&"元日"));
    assert!(names.contains(&"文化の日"));
    assert!(names.contains(&"スポーツの日"));
}

#[test]
fn nth_weekday_coming_of_age_2025() {
    assert_eq!(
        nth_weekday(2025, Month::January, Weekday::Monday, 2),
        Some(date(2025, 1, 13))
    );
}

#[test]
fn vernal_equinox_2025_window() {
    let d = vernal_equinox(2025).unwrap();
    assert_eq!(d.month(), 3);
    assert!((19..=21).contains(&d.day()), "{d}");
}

#[test]
fn outside_formula_window_uses_fallback_days() {
    let hs = compute_holidays(1990);
    let find = |k: NationalHoliday| hs.iter().find(|h| h.kind == k).unwrap().date;
    assert_eq!(find(NationalHoliday::VernalEquinoxDay), date(1990, 3, 20));
    assert_eq!(find(NationalHoliday::AutumnalEquinoxDay), date(1990, 9, 23));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn no_duplicate_dates(year in 1i32..=9999) {
        let hs = compute_holidays(year);
        let unique: HashSet<NaiveDate> = hs.iter().map(|h| h.date).collect();
        prop_assert_eq!(unique.len(), hs.len());
        prop_assert_eq!(hs.len(), 16);
    }

    #[test]
    fn all_dates_in_requested_year(year in 1i32..=9999) {
        for h in compute_holidays(year) {
            prop_assert_eq!(h.date.year(), year);
        }
    }

    #[test]
    fn happy_mondays_are_mondays(year in 1i32..=9999) {
        let mondays = [
            NationalHoliday::ComingOfAgeDay,
            NationalHoliday::MarineDay,
            NationalHoliday::RespectForTheAgedDay,
            NationalHoliday::SportsDay,
        ];
        for h in compute_holidays(year).iter().filter(|h| mondays.contains(&h.kind)) {
            prop_assert_eq!(h.date.weekday(), chrono::Weekday::Mon);
        }
    }

    #[test]
    fn equinoxes_within_window(year in EQUINOX_FORMULA_YEARS) {
        let v = vernal_equinox(year).unwrap();
        let a = autumnal_equinox(year).unwrap();
        prop_assert!((19..=21).contains(&v.day()), "vernal {}", v);
        prop_assert!((22..=24).contains(&a.day()), "autumnal {}", a);
    }

    #[test]
    fn repeated_calls_agree(year in 1i32..=9999) {
        prop_assert_eq!(compute_holidays(year), compute_holidays(year));
    }
}
