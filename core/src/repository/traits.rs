use crate::model::date_key::DateKey;
use anyhow::Result;

/// Key-value storage for the attendance set.
///
/// `load` returns `Ok(None)` when nothing has been saved yet.
pub trait AttendanceRepository {
    fn load(&self) -> Result<Option<Vec<DateKey>>>;
    fn save(&self, dates: &[DateKey]) -> Result<()>;
}

impl<R: AttendanceRepository + ?Sized> AttendanceRepository for &R {
    fn load(&self) -> Result<Option<Vec<DateKey>>> {
        (**self).load()
    }

    fn save(&self, dates: &[DateKey]) -> Result<()> {
        (**self).save(dates)
    }
}
