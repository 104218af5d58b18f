use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

use crate::model::date_key::DateKey;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MonthParseError {
    #[error("Invalid month '{0}', expected YYYY-MM")]
    Invalid(String),
}

const MIN_YEAR: i32 = 1;

/// The (year, month) pair whose grid is on screen. `month0` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewedMonth {
    pub year: i32,
    pub month0: u32,
}

impl ViewedMonth {
    /// Normalizes an overflowing `month0` into the following years.
    pub fn new(year: i32, month0: u32) -> Self {
        Self { year, month0: 0 }.offset_i64(month0 as i64)
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Moves forwards or backwards by whole calendar months.
    pub fn offset(self, months: i32) -> Self {
        self.offset_i64(months as i64)
    }

    /// Navigation stops at January of year 1 and at chrono's last month.
    fn offset_i64(self, months: i64) -> Self {
        let first = 12 * MIN_YEAR as i64;
        let last = 12 * NaiveDate::MAX.year() as i64 + 11;
        let total = (self.year as i64 * 12 + self.month0 as i64 + months).clamp(first, last);
        Self {
            year: total.div_euclid(12) as i32,
            month0: total.rem_euclid(12) as u32,
        }
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month0)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    /// Sunday-first column (0..=6) of the first day of the month.
    pub fn first_weekday(&self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn key(&self, day: u32) -> DateKey {
        DateKey::new(self.year, self.month0, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// Long month name and year, e.g. "January 2024".
    pub fn title(&self) -> String {
        match self.first_day() {
            Some(d) => d.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl Default for ViewedMonth {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for ViewedMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month0 + 1)
    }
}

impl FromStr for ViewedMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MonthParseError::Invalid(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month0: month - 1 })
    }
}

/// Number of days in the zero-based `month0` of `year`, i.e. the day before
/// the first of the following month. Overflowing months roll into later years.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let year = year as i64 + (month0 / 12) as i64;
    match month0 % 12 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        for year in [1999, 2023, 2024, 2100] {
            assert_eq!(days_in_month(year, 3), 30);
        }
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 11), 31);
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        for year in [1900, 2000, 2023, 2024] {
            for month0 in 0..12 {
                let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
                let next = ViewedMonth::containing(first).offset(1).first_day().unwrap();
                let last = next.pred_opt().unwrap();
                assert_eq!(days_in_month(year, month0), last.day());
            }
        }
    }

    #[test]
    fn test_overflowing_month_rolls_into_next_year() {
        assert_eq!(ViewedMonth::new(2023, 13), ViewedMonth { year: 2024, month0: 1 });
        assert_eq!(days_in_month(2023, 13), 29);
        assert_eq!(days_in_month(-4, 1), 29);
    }

    #[test]
    fn test_offset_rolls_year() {
        let dec = ViewedMonth { year: 2023, month0: 11 };
        assert_eq!(dec.offset(1), ViewedMonth { year: 2024, month0: 0 });

        let jan = ViewedMonth { year: 2024, month0: 0 };
        assert_eq!(jan.offset(-1), dec);
        assert_eq!(jan.offset(-25), ViewedMonth { year: 2021, month0: 11 });
    }

    #[test]
    fn test_offsets_compose() {
        let start = ViewedMonth { year: 2024, month0: 4 };
        for a in [-30, -13, -1, 0, 1, 7, 12, 40] {
            for b in [-24, -5, 0, 3, 11, 13] {
                assert_eq!(start.offset(a).offset(b), start.offset(a + b));
            }
        }
    }

    #[test]
    fn test_offset_stops_at_supported_range() {
        let first = ViewedMonth { year: 1, month0: 0 };
        assert_eq!(first.offset(-1), first);
        assert_eq!(ViewedMonth { year: 2024, month0: 0 }.offset(i32::MIN), first);

        let far = ViewedMonth { year: 2024, month0: 0 }.offset(i32::MAX);
        assert_eq!(far, ViewedMonth { year: NaiveDate::MAX.year(), month0: 11 });
        assert!(far.first_day().is_some());
        assert!(far.key(31).as_str().ends_with("-12-31"));
    }

    #[test]
    fn test_first_weekday_is_sunday_based() {
        // 2024-01-01 was a Monday, 2023-10-01 a Sunday.
        assert_eq!(ViewedMonth { year: 2024, month0: 0 }.first_weekday(), 1);
        assert_eq!(ViewedMonth { year: 2023, month0: 9 }.first_weekday(), 0);
    }

    #[test]
    fn test_title_and_display() {
        let month = ViewedMonth { year: 2024, month0: 0 };
        assert_eq!(month.title(), "January 2024");
        assert_eq!(month.to_string(), "2024-01");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2024-02".parse::<ViewedMonth>().unwrap(), ViewedMonth { year: 2024, month0: 1 });
        assert!("2024-13".parse::<ViewedMonth>().is_err());
        assert!("2024".parse::<ViewedMonth>().is_err());
        assert!("feb-2024".parse::<ViewedMonth>().is_err());
    }
}
