//! JSON-backed persistence for the habit record.
//!
//! The record file is the sole durable store. Every write replaces the
//! whole document through a temp file + rename, so a crash mid-write never
//! leaves a half-written record behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::record::HabitRecord;
use crate::error::StoreError;

/// Whole-record read/write over the backing store.
pub trait HabitStore {
    /// `Ok(None)` when no record exists yet (first run).
    fn read(&self) -> Result<Option<HabitRecord>, StoreError>;

    /// Overwrite the full record.
    fn write(&self, record: &HabitRecord) -> Result<(), StoreError>;
}

/// Habit record stored as a single JSON document on disk.
pub struct JsonHabitStore {
    path: PathBuf,
}

impl JsonHabitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/paulboy/habit_data.json`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created.
    pub fn default_path() -> io::Result<PathBuf> {
        Ok(crate::storage::data_dir()?.join("habit_data.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HabitStore for JsonHabitStore {
    fn read(&self) -> Result<Option<HabitRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        let record = serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(record))
    }

    fn write(&self, record: &HabitRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }
}
