use crate::model::attendance::AttendanceStore;
use crate::model::date_key::DateKey;
use crate::model::month::ViewedMonth;
use crate::model::stats::MonthlyStatistics;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub key: DateKey,
    pub present: bool,
    pub today: bool,
}

pub type Week = [Option<DayCell>; 7];

/// Everything needed to draw one month: a Sunday-first grid and its totals.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCalendar {
    pub month: ViewedMonth,
    pub title: String,
    pub weeks: Vec<Week>,
    pub stats: MonthlyStatistics,
}

impl MonthCalendar {
    pub fn build(store: &AttendanceStore, today: &DateKey) -> Self {
        let month = store.viewed_month();
        let mut slots: Vec<Option<DayCell>> = vec![None; month.first_weekday() as usize];

        for day in 1..=month.days() {
            let key = month.key(day);
            slots.push(Some(DayCell {
                day,
                present: store.is_present(&key),
                today: key == *today,
                key,
            }));
        }
        while slots.len() % 7 != 0 {
            slots.push(None);
        }

        let weeks = slots
            .chunks(7)
            .map(|chunk| std::array::from_fn(|i| chunk[i].clone()))
            .collect();

        Self {
            month,
            title: month.title(),
            weeks,
            stats: store.statistics(),
        }
    }

    /// Row and column of `day` in the grid.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter()
                .position(|cell| cell.as_ref().is_some_and(|c| c.day == day))
                .map(|col| (row, col))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(month: ViewedMonth, present: &[&str]) -> AttendanceStore {
        AttendanceStore::with_month(Some(present.iter().map(|k| DateKey::from(*k)).collect()), month)
    }

    #[test]
    fn test_january_2024_layout() {
        // Starts on a Monday, 31 days -> 5 rows.
        let month = ViewedMonth { year: 2024, month0: 0 };
        let cal = MonthCalendar::build(&store(month, &["2024-01-05"]), &DateKey::from("2024-01-10"));

        assert_eq!(cal.title, "January 2024");
        assert_eq!(cal.weeks.len(), 5);
        assert!(cal.weeks[0][0].is_none());
        assert_eq!(cal.weeks[0][1].as_ref().unwrap().day, 1);
        assert_eq!(cal.weeks[4][3].as_ref().unwrap().day, 31);
        assert!(cal.weeks[4][4].is_none());

        let fifth = cal.weeks[0][5].as_ref().unwrap();
        assert_eq!(fifth.key.as_str(), "2024-01-05");
        assert!(fifth.present);
        assert!(!fifth.today);

        let tenth = cal.weeks[1][3].as_ref().unwrap();
        assert!(tenth.today);
        assert!(!tenth.present);
    }

    #[test]
    fn test_every_day_appears_once() {
        let month = ViewedMonth { year: 2024, month0: 1 };
        let cal = MonthCalendar::build(&store(month, &[]), &DateKey::from("1999-01-01"));

        let days: Vec<u32> = cal.weeks.iter().flatten().flatten().map(|c| c.day).collect();
        assert_eq!(days, (1..=29).collect::<Vec<_>>());
        assert!(cal.weeks.iter().flatten().flatten().all(|c| !c.today));
    }

    #[test]
    fn test_stats_carried_along() {
        let month = ViewedMonth { year: 2024, month0: 0 };
        let cal = MonthCalendar::build(
            &store(month, &["2024-01-01", "2024-01-02", "2024-01-31"]),
            &DateKey::from("2024-01-01"),
        );
        assert_eq!(cal.stats.total_bill, 150);
    }

    #[test]
    fn test_position_of() {
        let month = ViewedMonth { year: 2024, month0: 0 };
        let cal = MonthCalendar::build(&store(month, &[]), &DateKey::from("2024-01-01"));

        assert_eq!(cal.position_of(1), Some((0, 1)));
        assert_eq!(cal.position_of(7), Some((1, 0)));
        assert_eq!(cal.position_of(32), None);
    }
}
