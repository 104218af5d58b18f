pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::{FileAttendanceRepository, DEFAULT_STORAGE_KEY};
pub use memory::MemoryAttendanceRepository;
pub use traits::AttendanceRepository;
