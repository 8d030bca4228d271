//! Calendar-date helpers over [`chrono::NaiveDate`].
//!
//! Dates carry no time-of-day and no timezone; two dates are the same day iff
//! they compare equal.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use koyomi_core::errors::{Error, Result};

use crate::month::Month;
use crate::weekday::Weekday;

/// Years accepted by [`CalendarBuilder`](crate::CalendarBuilder) and by the
/// transport layer.  Four-digit years keep the `YYYY-MM-DD` wire format.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Return `year` if it lies in [`SUPPORTED_YEARS`].
///
/// # Errors
/// Returns [`Error::YearOutOfRange`] otherwise.
pub fn check_year(year: i32) -> Result<i32> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(year)
    } else {
        Err(Error::YearOutOfRange {
            year,
            min: *SUPPORTED_YEARS.start(),
            max: *SUPPORTED_YEARS.end(),
        })
    }
}

/// Whether a given year is a leap year (proleptic Gregorian).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: Month) -> u32 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// The 1st of `month` in `year`, or `None` if the year is not representable.
pub fn first_of_month(year: i32, month: Month) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.number(), 1)
}

/// The last day of `month` in `year`, computed as the first day of the next
/// month minus one day.
pub fn last_of_month(year: i32, month: Month) -> Option<NaiveDate> {
    let (next, rolls_over) = month.succ();
    let next_year = if rolls_over { year.checked_add(1)? } else { year };
    first_of_month(next_year, next)?.pred_opt()
}

/// Return the *n*-th occurrence of `weekday` in `month` of `year`.
///
/// The first occurrence on or after the 1st is found, then advanced by
/// `n - 1` whole weeks.  For example `nth_weekday(2025, Month::January,
/// Weekday::Monday, 2)` is 2025-01-13.
///
/// Returns `None` if `n` is zero, if the month has fewer than `n` such
/// weekdays, or if the year is not representable.
pub fn nth_weekday(year: i32, month: Month, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }
    let first = first_of_month(year, month)?;
    let first_wd = first.weekday().num_days_from_sunday() as i32;
    let skip = (weekday.index() as i32 - first_wd).rem_euclid(7) as u32;
    let day = 1 + skip + 7 * (n - 1);
    if day > days_in_month(year, month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month.number(), day)
}
