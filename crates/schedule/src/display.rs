//! Human-readable delivery dates.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use dropday_core::calendar::weekday_index;

/// Language used for display dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Nl,
    De,
}

const WEEKDAYS_EN: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const WEEKDAYS_NL: [&str; 7] = ["zondag", "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag"];
const WEEKDAYS_DE: [&str; 7] = ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];
const MONTHS_NL: [&str; 12] = [
    "januari", "februari", "maart", "april", "mei", "juni",
    "juli", "augustus", "september", "oktober", "november", "december",
];
const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember",
];

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Nl => "nl",
            Locale::De => "de",
        }
    }

    fn weekday_names(self) -> &'static [&'static str; 7] {
        match self {
            Locale::En => &WEEKDAYS_EN,
            Locale::Nl => &WEEKDAYS_NL,
            Locale::De => &WEEKDAYS_DE,
        }
    }

    fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Locale::En => &MONTHS_EN,
            Locale::Nl => &MONTHS_NL,
            Locale::De => &MONTHS_DE,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "nl" => Ok(Locale::Nl),
            "de" => Ok(Locale::De),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Render `date` for customers, e.g. "Thursday 9 May" or "donderdag 9 mei".
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let weekday = locale.weekday_names()[weekday_index(date.weekday()) as usize];
    let month = locale.month_names()[date.month0() as usize];
    match locale {
        Locale::En | Locale::Nl => format!("{} {} {}", weekday, date.day(), month),
        Locale::De => format!("{}, {}. {}", weekday, date.day(), month),
    }
}
