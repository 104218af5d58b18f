use std::collections::HashSet;

use crate::model::date_key::DateKey;
use crate::model::month::ViewedMonth;
use crate::model::stats::MonthlyStatistics;

/// Days the vendor was present, plus the month currently being looked at.
///
/// The two halves are independent: toggling never moves the viewed month and
/// navigating never touches the attendance set.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceStore {
    present_dates: HashSet<DateKey>,
    viewed_month: ViewedMonth,
}

impl AttendanceStore {
    /// Restores the set from persisted keys, viewing the current month.
    pub fn initialize(persisted: Option<Vec<DateKey>>) -> Self {
        Self::with_month(persisted, ViewedMonth::current())
    }

    pub fn with_month(persisted: Option<Vec<DateKey>>, viewed_month: ViewedMonth) -> Self {
        Self {
            present_dates: persisted.unwrap_or_default().into_iter().collect(),
            viewed_month,
        }
    }

    /// Flips membership of `key` and returns whether it is now present.
    pub fn toggle_presence(&mut self, key: &DateKey) -> bool {
        if self.present_dates.remove(key) {
            false
        } else {
            self.present_dates.insert(key.clone());
            true
        }
    }

    pub fn change_month(&mut self, offset_months: i32) {
        self.viewed_month = self.viewed_month.offset(offset_months);
    }

    pub fn set_viewed_month(&mut self, month: ViewedMonth) {
        self.viewed_month = month;
    }

    pub fn viewed_month(&self) -> ViewedMonth {
        self.viewed_month
    }

    pub fn is_present(&self, key: &DateKey) -> bool {
        self.present_dates.contains(key)
    }

    pub fn present_dates(&self) -> &HashSet<DateKey> {
        &self.present_dates
    }

    pub fn len(&self) -> usize {
        self.present_dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present_dates.is_empty()
    }

    pub fn statistics(&self) -> MonthlyStatistics {
        MonthlyStatistics::compute(&self.present_dates, self.viewed_month)
    }

    /// Present keys of the viewed month, in calendar order.
    pub fn present_in_month(&self) -> Vec<DateKey> {
        (1..=self.viewed_month.days())
            .map(|day| self.viewed_month.key(day))
            .filter(|key| self.present_dates.contains(key))
            .collect()
    }

    /// Members in sorted order, ready to be written out.
    pub fn snapshot(&self) -> Vec<DateKey> {
        let mut keys: Vec<DateKey> = self.present_dates.iter().cloned().collect();
        keys.sort();
        keys
    }
}
