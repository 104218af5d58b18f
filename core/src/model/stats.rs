use std::collections::HashSet;

use crate::model::date_key::DateKey;
use crate::model::month::ViewedMonth;

/// Price charged for each day the vendor delivered.
pub const PER_DAY_RATE: u64 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStatistics {
    pub days: u32,
    pub present: u32,
    pub total_bill: u64,
    pub percentage: String, // one fractional digit, e.g. "9.7"
}

impl MonthlyStatistics {
    pub fn compute(present_dates: &HashSet<DateKey>, month: ViewedMonth) -> Self {
        let days = month.days();
        let present = (1..=days)
            .filter(|day| present_dates.contains(&month.key(*day)))
            .count() as u32;

        Self {
            days,
            present,
            total_bill: present as u64 * PER_DAY_RATE,
            percentage: format!("{:.1}", present as f64 / days as f64 * 100.0),
        }
    }

    /// Unrounded share of the month's days that had a delivery.
    pub fn ratio(&self) -> f64 {
        self.present as f64 / self.days as f64
    }
}
