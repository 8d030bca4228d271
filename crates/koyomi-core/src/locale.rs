//! `Locale`: which language labels are rendered in.

use serde::{Deserialize, Serialize};

/// Label language for weekday names, holiday names and rokuyo labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese (`月`, `元日`, `大安`, …).
    #[default]
    Ja,
    /// English (`Monday`, `New Year's Day`, `Taian`, …).
    En,
}

impl Locale {
    /// Return the lowercase language code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            other => Err(crate::errors::Error::InvalidInput(format!(
                "unknown locale {other:?}, expected \"ja\" or \"en\""
            ))),
        }
    }
}
