//! Local record store.
//!
//! Persists the full patient collection as one JSON document at a fixed
//! path. Every mutating call rewrites the whole document; there is no
//! incremental diffing. Serial numbers are assigned here independently of
//! the remote backend and the two are never reconciled.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::models::{PatientInput, PatientRecord};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no patient record with serial {0}")]
    NotFound(u32),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable store holding the patient collection in a single file.
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Create a store backed by the given file. The file is only touched
    /// on first mutation.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored collection.
    ///
    /// A missing file or an unreadable document degrades to an empty
    /// collection; this never fails outwardly.
    pub fn load_all(&self) -> Vec<PatientRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!(path = %self.path.display(), error = %err, "record file unreadable, starting empty");
                }
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "record file failed to parse, starting empty");
                Vec::new()
            }
        }
    }

    /// Append a new record under the next serial and return that serial.
    pub fn add(&self, input: &PatientInput) -> StoreResult<u32> {
        let mut records = self.load_all();
        let sno = next_serial(&records);

        records.push(PatientRecord::from_input(sno, input));
        self.persist(&records)?;

        Ok(sno)
    }

    /// Replace every field of the record with the given serial.
    ///
    /// The serial is preserved and the rest of the collection is left
    /// untouched. Fails with [`StoreError::NotFound`] when no record
    /// matches, without rewriting the file.
    pub fn update(&self, sno: u32, input: &PatientInput) -> StoreResult<()> {
        let mut records = self.load_all();

        let slot = records
            .iter_mut()
            .find(|r| r.sno == sno)
            .ok_or(StoreError::NotFound(sno))?;
        *slot = PatientRecord::from_input(sno, input);

        self.persist(&records)
    }

    fn persist(&self, records: &[PatientRecord]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn next_serial(records: &[PatientRecord]) -> u32 {
    records.iter().map(|r| r.sno).max().map_or(1, |max| max + 1)
}
