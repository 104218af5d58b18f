use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateKeyError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    Invalid(String),
}

/// Canonical `YYYY-MM-DD` identifier of a calendar day.
///
/// Keys restored from storage are kept as opaque strings; only keys typed by
/// the user go through [`DateKey::parse`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Builds the key for `day` of the zero-based `month0` of `year`.
    pub fn new(year: i32, month0: u32, day: u32) -> Self {
        let sign = if year < 0 { "-" } else { "" };
        DateKey(format!("{}{:04}-{:02}-{:02}", sign, year.unsigned_abs(), month0 + 1, day))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0(), date.day())
    }

    /// Key of the current day on the device-local calendar.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn parse(input: &str) -> Result<Self, DateKeyError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("today") {
            return Ok(Self::today());
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| DateKeyError::Invalid(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DateKey {
    fn from(raw: String) -> Self {
        DateKey(raw)
    }
}

impl From<&str> for DateKey {
    fn from(raw: &str) -> Self {
        DateKey(raw.to_string())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
