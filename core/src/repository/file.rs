use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::model::date_key::DateKey;
use crate::repository::traits::AttendanceRepository;

pub const DEFAULT_STORAGE_KEY: &str = "milkVendorAttendance";

/// Keeps the attendance set as a JSON array of strings in
/// `<base_dir>/<storage_key>.json`.
#[derive(Clone, Debug)]
pub struct FileAttendanceRepository {
    file_path: PathBuf,
}

impl FileAttendanceRepository {
    pub fn new(base_dir: Option<PathBuf>, storage_key: &str) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create data directory {}", path.display()))?;
        path.push(format!("{}.json", storage_key));

        Ok(FileAttendanceRepository { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

/// `~/.milkvendor`
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".milkvendor"))
}

impl AttendanceRepository for FileAttendanceRepository {
    fn load(&self) -> Result<Option<Vec<DateKey>>> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no saved attendance");
            return Ok(None);
        }
        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let dates: Vec<DateKey> = serde_json::from_reader(reader)
            .with_context(|| format!("Corrupt attendance file {}", self.file_path.display()))?;
        debug!(count = dates.len(), "loaded attendance");
        Ok(Some(dates))
    }

    /// Writes a sibling `.tmp` file and renames it over the live one, so the
    /// live file holds either the previous array or the new one.
    fn save(&self, dates: &[DateKey]) -> Result<()> {
        let tmp_path = self.tmp_path();
        let file = File::create(&tmp_path)
            .with_context(|| format!("Could not write {}", tmp_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, dates)?;
        writer.flush()?;
        writer.into_inner()?.sync_all()?;
        fs::rename(&tmp_path, &self.file_path)
            .with_context(|| format!("Could not replace {}", self.file_path.display()))?;
        debug!(count = dates.len(), "saved attendance");
        Ok(())
    }
}
