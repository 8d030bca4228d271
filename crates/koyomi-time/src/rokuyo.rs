//! Rokuyo (六曜), the six-day fortune-telling cycle.
//!
//! Traditionally the cycle is anchored to the lunisolar calendar.  Here it is
//! an arithmetic approximation over the *Gregorian* month and day:
//! `(month + day) mod 6` indexes [`Rokuyo::ORDER`].  The output is stable and
//! cheap but does **not** match a real rokuyo almanac.

use chrono::{Datelike, NaiveDate};
use koyomi_core::Locale;

/// One of the six rokuyo symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rokuyo {
    /// 大安
    Taian,
    /// 赤口
    Shakko,
    /// 先勝
    Sensho,
    /// 友引
    Tomobiki,
    /// 先負
    Senbu,
    /// 仏滅
    Butsumetsu,
}

impl Rokuyo {
    /// The cycle order indexed by `(month + day) mod 6`.
    pub const ORDER: [Rokuyo; 6] = [
        Rokuyo::Taian,
        Rokuyo::Shakko,
        Rokuyo::Sensho,
        Rokuyo::Tomobiki,
        Rokuyo::Senbu,
        Rokuyo::Butsumetsu,
    ];

    /// The (approximate) rokuyo of a Gregorian month and day.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        Self::ORDER[((month + day) % 6) as usize]
    }

    /// The (approximate) rokuyo of `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self::from_month_day(date.month(), date.day())
    }

    /// Return the label in `locale` (`"大安"` / `"Taian"`).
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ja, Rokuyo::Taian) => "大安",
            (Locale::Ja, Rokuyo::Shakko) => "赤口",
            (Locale::Ja, Rokuyo::Sensho) => "先勝",
            (Locale::Ja, Rokuyo::Tomobiki) => "友引",
            (Locale::Ja, Rokuyo::Senbu) => "先負",
            (Locale::Ja, Rokuyo::Butsumetsu) => "仏滅",
            (Locale::En, Rokuyo::Taian) => "Taian",
            (Locale::En, Rokuyo::Shakko) => "Shakko",
            (Locale::En, Rokuyo::Sensho) => "Sensho",
            (Locale::En, Rokuyo::Tomobiki) => "Tomobiki",
            (Locale::En, Rokuyo::Senbu) => "Senbu",
            (Locale::En, Rokuyo::Butsumetsu) => "Butsumetsu",
        }
    }
}

impl std::fmt::Display for Rokuyo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Locale::Ja))
    }
}
