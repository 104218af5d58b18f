use std::cell::RefCell;

use anyhow::Result;

use crate::model::date_key::DateKey;
use crate::repository::traits::AttendanceRepository;

/// Keeps the last saved snapshot in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryAttendanceRepository {
    saved: RefCell<Option<Vec<DateKey>>>,
    saves: RefCell<usize>,
}

impl MemoryAttendanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dates(dates: Vec<DateKey>) -> Self {
        Self {
            saved: RefCell::new(Some(dates)),
            saves: RefCell::new(0),
        }
    }

    pub fn saved(&self) -> Option<Vec<DateKey>> {
        self.saved.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl AttendanceRepository for MemoryAttendanceRepository {
    fn load(&self) -> Result<Option<Vec<DateKey>>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, dates: &[DateKey]) -> Result<()> {
        *self.saved.borrow_mut() = Some(dates.to_vec());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
