//! Monthly calendar construction.
//!
//! [`CalendarBuilder::build`] walks every date of a month and annotates it
//! with its weekday label, holiday status, and rokuyo label.  Events are left
//! empty for the caller to fill in (see [`Calendar::day_mut`]).

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use koyomi_core::errors::Result;
use koyomi_core::{Event, Locale};
use serde::Serialize;

use crate::date::{check_year, first_of_month, last_of_month};
use crate::holiday::HolidayCalculator;
use crate::month::Month;
use crate::rokuyo::Rokuyo;
use crate::weekday::Weekday;

/// One annotated day of a [`Calendar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Day of the month (1–31).
    pub day: u32,
    /// Weekday label.
    pub weekday: &'static str,
    /// Whether the date is a national holiday.
    pub is_holiday: bool,
    /// Holiday name; `Some` iff `is_holiday`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<&'static str>,
    /// Rokuyo label (approximate, see [`crate::rokuyo`]).
    pub rokuyo: &'static str,
    /// Events touching this day, supplied by the caller.
    pub events: Vec<Event>,
}

impl CalendarDay {
    /// The holiday name, or `""` for an ordinary day.
    pub fn holiday_name(&self) -> &str {
        self.holiday.unwrap_or("")
    }
}

/// A month of annotated days.
///
/// `days` covers the 1st through the last day of the month, contiguous and
/// ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendar {
    /// Year.
    pub year: i32,
    /// Month number (1–12).
    pub month: u32,
    /// One entry per date of the month.
    pub days: Vec<CalendarDay>,
}

impl Calendar {
    /// Number of days in the month.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the calendar holds no days.  Never true for a built calendar.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The first date of the month.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    /// The last date of the month.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    /// Look up the day for `date`, or `None` if `date` is outside the month.
    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.index_of(date).map(|i| &self.days[i])
    }

    /// Mutable lookup, used to merge events into a day's bucket.
    pub fn day_mut(&mut self, date: NaiveDate) -> Option<&mut CalendarDay> {
        self.index_of(date).map(move |i| &mut self.days[i])
    }

    fn index_of(&self, date: NaiveDate) -> Option<usize> {
        if date.year() != self.year || date.month() != self.month {
            return None;
        }
        let i = date.day0() as usize;
        (i < self.days.len()).then_some(i)
    }
}

/// Builds [`Calendar`]s.
///
/// Stateless apart from the label locale; safe to share and call from any
/// number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarBuilder {
    holidays: HolidayCalculator,
}

impl CalendarBuilder {
    /// Builder producing labels in the default locale (Japanese).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder producing labels in `locale`.
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            holidays: HolidayCalculator::with_locale(locale),
        }
    }

    /// The label locale.
    pub fn locale(&self) -> Locale {
        self.holidays.locale()
    }

    /// Build the calendar for `month` (1–12) of `year`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMonth`](koyomi_core::Error::InvalidMonth) if
    /// `month` is outside 1–12 and
    /// [`Error::YearOutOfRange`](koyomi_core::Error::YearOutOfRange) if `year`
    /// is outside [`SUPPORTED_YEARS`](crate::date::SUPPORTED_YEARS).
    pub fn build(&self, year: i32, month: u32) -> Result<Calendar> {
        let month = Month::try_from(month)?;
        let year = check_year(year)?;
        Ok(self.build_month(year, month))
    }

    fn build_month(&self, year: i32, month: Month) -> Calendar {
        let locale = self.locale();
        // Every supported year is representable, so both bounds exist.
        let (Some(first), Some(last)) = (first_of_month(year, month), last_of_month(year, month))
        else {
            return Calendar {
                year,
                month: month.number(),
                days: Vec::new(),
            };
        };

        let holiday_names: HashMap<NaiveDate, &'static str> = self
            .holidays
            .holidays(year)
            .into_iter()
            .map(|h| (h.date, h.name))
            .collect();

        let days = first
            .iter_days()
            .take_while(|d| *d <= last)
            .map(|date| {
                let holiday = holiday_names.get(&date).copied();
                CalendarDay {
                    date,
                    day: date.day(),
                    weekday: Weekday::from(date.weekday()).label(locale),
                    is_holiday: holiday.is_some(),
                    holiday,
                    rokuyo: Rokuyo::of(date).label(locale),
                    events: Vec::new(),
                }
            })
            .collect();

        Calendar {
            year,
            month: month.number(),
            days,
        }
    }
}

/// Calendar for `month` (1–12) of `year` in the default locale.
///
/// See [`CalendarBuilder::build`].
pub fn build_month(year: i32, month: u32) -> Result<Calendar> {
    CalendarBuilder::new().build(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use koyomi_core::Error;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn december_2025() {
        let cal = build_month(2025, 12).unwrap();
        assert_eq!(cal.year, 2025);
        assert_eq!(cal.month, 12);
        assert_eq!(cal.len(), 31);
        let first = &cal.days[0];
        assert_eq!(first.day, 1);
        assert_eq!(first.weekday, "月");
        assert!(!first.is_holiday);
        assert_eq!(first.holiday_name(), "");
    }

    #[test]
    fn new_years_day_is_joined() {
        let cal = CalendarBuilder::with_locale(Locale::En).build(2025, 1).unwrap();
        let first = &cal.days[0];
        assert!(first.is_holiday);
        assert_eq!(first.holiday, Some("New Year's Day"));
        // Coming of Age Day, 2nd Monday
        let coming_of_age = cal.day(date(2025, 1, 13)).unwrap();
        assert_eq!(coming_of_age.holiday, Some("Coming of Age Day"));
        assert_eq!(coming_of_age.weekday, "Monday");
    }

    #[test]
    fn february_lengths() {
        assert_eq!(build_month(2024, 2).unwrap().len(), 29);
        assert_eq!(build_month(2025, 2).unwrap().len(), 28);
        assert_eq!(build_month(2000, 2).unwrap().len(), 29);
        assert_eq!(build_month(2100, 2).unwrap().len(), 28);
    }

    #[test]
    fn rejects_bad_month() {
        assert_eq!(build_month(2025, 0), Err(Error::InvalidMonth(0)));
        assert_eq!(build_month(2025, 13), Err(Error::InvalidMonth(13)));
    }

    #[test]
    fn rejects_bad_year() {
        assert!(matches!(
            build_month(0, 1),
            Err(Error::YearOutOfRange { year: 0, .. })
        ));
    }

    #[test]
    fn day_lookup() {
        let mut cal = build_month(2025, 4).unwrap();
        assert_eq!(cal.first_date(), Some(date(2025, 4, 1)));
        assert_eq!(cal.last_date(), Some(date(2025, 4, 30)));
        assert_eq!(cal.day(date(2025, 4, 29)).unwrap().holiday, Some("昭和の日"));
        assert!(cal.day(date(2025, 5, 1)).is_none());
        assert!(cal.day(date(2024, 4, 1)).is_none());
        assert!(cal.day_mut(date(2025, 4, 30)).is_some());
    }

    #[test]
    fn serialized_shape() {
        let cal = build_month(2025, 1).unwrap();
        let json = serde_json::to_value(&cal).unwrap();
        let d1 = &json["days"][0];
        assert_eq!(d1["date"], "2025-01-01");
        assert_eq!(d1["day"], 1);
        assert_eq!(d1["weekday"], "水");
        assert_eq!(d1["is_holiday"], true);
        assert_eq!(d1["holiday"], "元日");
        assert_eq!(d1["rokuyo"], "先勝");
        assert_eq!(d1["events"], serde_json::json!([]));
        // Ordinary days omit the holiday key.
        assert!(json["days"][1].get("holiday").is_none());
    }
}
