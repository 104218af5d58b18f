pub mod config;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::Config;
pub use model::attendance::AttendanceStore;
pub use model::date_key::{DateKey, DateKeyError};
pub use model::month::{days_in_month, MonthParseError, ViewedMonth};
pub use model::stats::{MonthlyStatistics, PER_DAY_RATE};
pub use repository::{AttendanceRepository, FileAttendanceRepository, MemoryAttendanceRepository};
pub use service::attendance_service::AttendanceService;
pub use usecase::calendar::{DayCell, MonthCalendar, WEEKDAY_LABELS};
