//! Japanese national holidays.
//!
//! Three classes of holiday are produced for a year:
//! * fixed dates (New Year's Day, Culture Day, …),
//! * the *n*-th Monday of a month (Coming of Age Day, Marine Day, …),
//! * the two equinox days, estimated by a linear approximation.
//!
//! Substitute holidays for holidays falling on a Sunday (*furikae kyūjitsu*)
//! and historical changes to the holiday law are not modelled.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use koyomi_core::Locale;
use serde::Serialize;

use crate::date::nth_weekday;
use crate::month::Month;
use crate::weekday::Weekday;

/// A national holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NationalHoliday {
    /// 元日, January 1.
    NewYearsDay,
    /// 成人の日, 2nd Monday of January.
    ComingOfAgeDay,
    /// 建国記念の日, February 11.
    NationalFoundationDay,
    /// 天皇誕生日, February 23.
    EmperorsBirthday,
    /// 春分の日, around March 20.
    VernalEquinoxDay,
    /// 昭和の日, April 29.
    ShowaDay,
    /// 憲法記念日, May 3.
    ConstitutionMemorialDay,
    /// みどりの日, May 4.
    GreeneryDay,
    /// こどもの日, May 5.
    ChildrensDay,
    /// 海の日, 3rd Monday of July.
    MarineDay,
    /// 山の日, August 11.
    MountainDay,
    /// 敬老の日, 3rd Monday of September.
    RespectForTheAgedDay,
    /// 秋分の日, around September 23.
    AutumnalEquinoxDay,
    /// スポーツの日, 2nd Monday of October.
    SportsDay,
    /// 文化の日, November 3.
    CultureDay,
    /// 勤労感謝の日, November 23.
    LaborThanksgivingDay,
}

impl NationalHoliday {
    /// Return the holiday's name in `locale`.
    pub fn name(&self, locale: Locale) -> &'static str {
        use NationalHoliday::*;
        match locale {
            Locale::Ja => match self {
                NewYearsDay => "元日",
                ComingOfAgeDay => "成人の日",
                NationalFoundationDay => "建国記念の日",
                EmperorsBirthday => "天皇誕生日",
                VernalEquinoxDay => "春分の日",
                ShowaDay => "昭和の日",
                ConstitutionMemorialDay => "憲法記念日",
                GreeneryDay => "みどりの日",
                ChildrensDay => "こどもの日",
                MarineDay => "海の日",
                MountainDay => "山の日",
                RespectForTheAgedDay => "敬老の日",
                AutumnalEquinoxDay => "秋分の日",
                SportsDay => "スポーツの日",
                CultureDay => "文化の日",
                LaborThanksgivingDay => "勤労感謝の日",
            },
            Locale::En => match self {
                NewYearsDay => "New Year's Day",
                ComingOfAgeDay => "Coming of Age Day",
                NationalFoundationDay => "National Foundation Day",
                EmperorsBirthday => "Emperor's Birthday",
                VernalEquinoxDay => "Vernal Equinox Day",
                ShowaDay => "Showa Day",
                ConstitutionMemorialDay => "Constitution Memorial Day",
                GreeneryDay => "Greenery Day",
                ChildrensDay => "Children's Day",
                MarineDay => "Marine Day",
                MountainDay => "Mountain Day",
                RespectForTheAgedDay => "Respect for the Aged Day",
                AutumnalEquinoxDay => "Autumnal Equinox Day",
                SportsDay => "Sports Day",
                CultureDay => "Culture Day",
                LaborThanksgivingDay => "Labor Thanksgiving Day",
            },
        }
    }
}

/// A holiday on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Holiday {
    /// The calendar date.
    pub date: NaiveDate,
    /// Localised name.
    pub name: &'static str,
    /// Which holiday this is.
    #[serde(skip)]
    pub kind: NationalHoliday,
}

/// Holidays on a fixed (month, day).
const FIXED_HOLIDAYS: [(Month, u32, NationalHoliday); 10] = [
    (Month::January, 1, NationalHoliday::NewYearsDay),
    (Month::February, 11, NationalHoliday::NationalFoundationDay),
    (Month::February, 23, NationalHoliday::EmperorsBirthday),
    (Month::April, 29, NationalHoliday::ShowaDay),
    (Month::May, 3, NationalHoliday::ConstitutionMemorialDay),
    (Month::May, 4, NationalHoliday::GreeneryDay),
    (Month::May, 5, NationalHoliday::ChildrensDay),
    (Month::August, 11, NationalHoliday::MountainDay),
    (Month::November, 3, NationalHoliday::CultureDay),
    (Month::November, 23, NationalHoliday::LaborThanksgivingDay),
];

/// Holidays on the *n*-th weekday of a month ("Happy Monday" holidays).
const NTH_WEEKDAY_HOLIDAYS: [(Month, Weekday, u32, NationalHoliday); 4] = [
    (Month::January, Weekday::Monday, 2, NationalHoliday::ComingOfAgeDay),
    (Month::July, Weekday::Monday, 3, NationalHoliday::MarineDay),
    (Month::September, Weekday::Monday, 3, NationalHoliday::RespectForTheAgedDay),
    (Month::October, Weekday::Monday, 2, NationalHoliday::SportsDay),
];

/// Years for which the equinox approximation is calibrated.
pub const EQUINOX_FORMULA_YEARS: RangeInclusive<i32> = 2000..=2099;

const VERNAL_EQUINOX_BASE: f64 = 20.8431;
const AUTUMNAL_EQUINOX_BASE: f64 = 23.2488;
const EQUINOX_DRIFT_PER_YEAR: f64 = 0.242194;

/// Day of March used for the vernal equinox outside [`EQUINOX_FORMULA_YEARS`].
pub const VERNAL_EQUINOX_FALLBACK_DAY: u32 = 20;
/// Day of September used for the autumnal equinox outside [`EQUINOX_FORMULA_YEARS`].
pub const AUTUMNAL_EQUINOX_FALLBACK_DAY: u32 = 23;

/// `floor(base + 0.242194·(y−1980)) − (y−1980) div 4`, or `fallback` when
/// `year` is outside [`EQUINOX_FORMULA_YEARS`].
fn equinox_day(base: f64, fallback: u32, year: i32) -> u32 {
    if !EQUINOX_FORMULA_YEARS.contains(&year) {
        return fallback;
    }
    let offset = year - 1980;
    let estimate = (base + EQUINOX_DRIFT_PER_YEAR * f64::from(offset)).floor() as i32;
    (estimate - offset / 4) as u32
}

/// Approximate day of March of the vernal equinox.
///
/// Outside 2000–2099 this returns [`VERNAL_EQUINOX_FALLBACK_DAY`], which is
/// not astronomically meaningful; see [`equinox_is_estimated`].
pub fn vernal_equinox_day(year: i32) -> u32 {
    equinox_day(VERNAL_EQUINOX_BASE, VERNAL_EQUINOX_FALLBACK_DAY, year)
}

/// Approximate day of September of the autumnal equinox.
///
/// Outside 2000–2099 this returns [`AUTUMNAL_EQUINOX_FALLBACK_DAY`].
pub fn autumnal_equinox_day(year: i32) -> u32 {
    equinox_day(AUTUMNAL_EQUINOX_BASE, AUTUMNAL_EQUINOX_FALLBACK_DAY, year)
}

/// Vernal Equinox Day of `year`.
pub fn vernal_equinox(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, Month::March.number(), vernal_equinox_day(year))
}

/// Autumnal Equinox Day of `year`.
pub fn autumnal_equinox(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, Month::September.number(), autumnal_equinox_day(year))
}

/// Return `true` if the equinox dates of `year` come from the fixed fallback
/// days rather than the approximation formula.
pub fn equinox_is_estimated(year: i32) -> bool {
    !EQUINOX_FORMULA_YEARS.contains(&year)
}

/// Computes the national holidays of a year.
///
/// Stateless: every call builds a fresh list, nothing is cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HolidayCalculator {
    locale: Locale,
}

impl HolidayCalculator {
    /// Calculator producing labels in the default locale (Japanese).
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator producing labels in `locale`.
    pub fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }

    /// The label locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// All national holidays of `year`, ordered by date.
    ///
    /// Total over every year: a year that chrono cannot represent simply
    /// yields no dates.  The equinox days outside 2000–2099 use fixed
    /// fallback days and should be treated as placeholders.
    pub fn holidays(&self, year: i32) -> Vec<Holiday> {
        let fixed = FIXED_HOLIDAYS.iter().filter_map(|&(month, day, kind)| {
            NaiveDate::from_ymd_opt(year, month.number(), day).map(|date| (date, kind))
        });
        let nth = NTH_WEEKDAY_HOLIDAYS
            .iter()
            .filter_map(|&(month, weekday, n, kind)| {
                nth_weekday(year, month, weekday, n).map(|date| (date, kind))
            });
        let equinoxes = [
            vernal_equinox(year).map(|d| (d, NationalHoliday::VernalEquinoxDay)),
            autumnal_equinox(year).map(|d| (d, NationalHoliday::AutumnalEquinoxDay)),
        ];

        let mut holidays: Vec<Holiday> = fixed
            .chain(nth)
            .chain(equinoxes.into_iter().flatten())
            .map(|(date, kind)| Holiday {
                date,
                name: kind.name(self.locale),
                kind,
            })
            .collect();
        holidays.sort_by_key(|h| h.date);
        holidays
    }
}

/// National holidays of `year` in the default locale.
pub fn compute_holidays(year: i32) -> Vec<Holiday> {
    HolidayCalculator::new().holidays(year)
}
