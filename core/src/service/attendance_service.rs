use anyhow::Result;
use tracing::{debug, warn};

use crate::model::attendance::AttendanceStore;
use crate::model::date_key::DateKey;
use crate::model::month::ViewedMonth;
use crate::model::stats::MonthlyStatistics;
use crate::repository::AttendanceRepository;
use crate::usecase::calendar::MonthCalendar;

/// Ties the attendance store to its storage: every change is written through.
pub struct AttendanceService<R: AttendanceRepository> {
    repo: R,
    store: AttendanceStore,
}

impl<R: AttendanceRepository> AttendanceService<R> {
    pub fn open(repo: R) -> Self {
        Self::open_at(repo, ViewedMonth::current())
    }

    /// Unreadable or corrupt storage is treated as "nothing saved yet".
    pub fn open_at(repo: R, month: ViewedMonth) -> Self {
        let persisted = match repo.load() {
            Ok(dates) => dates,
            Err(e) => {
                warn!("Ignoring saved attendance: {:#}", e);
                None
            }
        };
        let store = AttendanceStore::with_month(persisted, month);
        debug!(present = store.len(), month = %month, "attendance opened");
        Self { repo, store }
    }

    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }

    /// Returns whether `key` is present after the toggle.
    pub fn toggle(&mut self, key: &DateKey) -> Result<bool> {
        let present = self.store.toggle_presence(key);
        debug!(%key, present, "toggled");
        self.repo.save(&self.store.snapshot())?;
        Ok(present)
    }

    pub fn change_month(&mut self, offset_months: i32) {
        self.store.change_month(offset_months);
    }

    pub fn view_month(&mut self, month: ViewedMonth) {
        self.store.set_viewed_month(month);
    }

    pub fn go_to_today(&mut self) {
        self.store.set_viewed_month(ViewedMonth::current());
    }

    pub fn statistics(&self) -> MonthlyStatistics {
        self.store.statistics()
    }

    pub fn calendar(&self, today: &DateKey) -> MonthCalendar {
        MonthCalendar::build(&self.store, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{FileAttendanceRepository, MemoryAttendanceRepository};
    use anyhow::anyhow;

    struct BrokenRepo;

    impl AttendanceRepository for BrokenRepo {
        fn load(&self) -> Result<Option<Vec<DateKey>>> {
            Err(anyhow!("corrupt"))
        }
        fn save(&self, _dates: &[DateKey]) -> Result<()> {
            Err(anyhow!("read-only"))
        }
    }

    fn january() -> ViewedMonth {
        ViewedMonth { year: 2024, month0: 0 }
    }

    #[test]
    fn test_open_restores_saved_dates() {
        let repo = MemoryAttendanceRepository::with_dates(vec![DateKey::from("2024-01-05")]);
        let service = AttendanceService::open_at(&repo, january());

        assert!(service.store().is_present(&DateKey::from("2024-01-05")));
        assert_eq!(service.statistics().present, 1);
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let service = AttendanceService::open_at(BrokenRepo, january());
        assert!(service.store().is_empty());
        assert_eq!(service.statistics().percentage, "0.0");
    }

    #[test]
    fn test_toggle_writes_through() {
        let repo = MemoryAttendanceRepository::new();
        let mut service = AttendanceService::open_at(&repo, january());

        assert!(service.toggle(&DateKey::from("2024-01-12")).unwrap());
        assert!(service.toggle(&DateKey::from("2024-01-05")).unwrap());
        assert_eq!(
            repo.saved(),
            Some(vec![DateKey::from("2024-01-05"), DateKey::from("2024-01-12")])
        );

        assert!(!service.toggle(&DateKey::from("2024-01-12")).unwrap());
        assert_eq!(repo.saved(), Some(vec![DateKey::from("2024-01-05")]));
        assert_eq!(repo.save_count(), 3);
    }

    #[test]
    fn test_navigation_does_not_save() {
        let repo = MemoryAttendanceRepository::new();
        let mut service = AttendanceService::open_at(&repo, january());

        service.change_month(1);
        service.change_month(-13);
        assert_eq!(service.store().viewed_month(), ViewedMonth { year: 2023, month0: 0 });
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn test_failed_save_is_reported() {
        let mut service = AttendanceService::open_at(BrokenRepo, january());
        assert!(service.toggle(&DateKey::from("2024-01-01")).is_err());
    }

    #[test]
    fn test_reopen_sees_previous_toggles() {
        let repo = MemoryAttendanceRepository::new();
        {
            let mut service = AttendanceService::open_at(&repo, january());
            service.toggle(&DateKey::from("2024-01-01")).unwrap();
            service.toggle(&DateKey::from("2024-01-31")).unwrap();
        }
        let service = AttendanceService::open_at(&repo, january());
        assert_eq!(service.statistics().total_bill, 100);
    }

    #[test]
    fn test_toggle_after_interrupted_save_keeps_history() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let repo = FileAttendanceRepository::new(Some(tmp.path().to_path_buf()), "att").unwrap();
        {
            let mut service = AttendanceService::open_at(&repo, january());
            for day in ["2024-01-01", "2024-01-02", "2024-01-03"] {
                service.toggle(&DateKey::from(day)).unwrap();
            }
        }
        let mut tmp_name = repo.path().as_os_str().to_owned();
        tmp_name.push(".tmp");
        std::fs::write(&tmp_name, r#"["2024-01-01","20"#).unwrap();

        let mut service = AttendanceService::open_at(&repo, january());
        service.toggle(&DateKey::from("2024-01-10")).unwrap();

        assert_eq!(service.statistics().present, 4);
        assert_eq!(repo.load().unwrap().map(|d| d.len()), Some(4));
    }
}
