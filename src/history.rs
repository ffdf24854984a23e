use crate::net::registry::CallRecord;
use crate::{HarnessError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallHistory {
    pub date: String,
    pub contract: String,
    pub function: String,
    pub args_count: usize,
    pub height: u64,
    pub stubbed: bool,
    pub returned: Option<String>,
}

impl CallHistory {
    /// Stamp a call record with the current wall-clock time.
    pub fn from_record(record: &CallRecord) -> Self {
        Self {
            date: chrono::Utc::now().to_rfc3339(),
            contract: record.contract.clone(),
            function: record.function.clone(),
            args_count: record.args_count,
            height: record.height,
            stubbed: record.stubbed,
            returned: record.returned.clone(),
        }
    }
}

pub struct HistoryManager {
    file_path: PathBuf,
}

impl HistoryManager {
    /// Create a new HistoryManager using the default `~/.clarity-mocknet/history.json` path.
    pub fn new() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| {
                HarnessError::FileError("Could not determine home directory".to_string())
            })?;
        let state_dir = PathBuf::from(home_dir).join(".clarity-mocknet");
        if !state_dir.exists() {
            fs::create_dir_all(&state_dir).map_err(|e| {
                HarnessError::FileError(format!(
                    "Failed to create state directory {:?}: {}",
                    state_dir, e
                ))
            })?;
        }
        Ok(Self {
            file_path: state_dir.join("history.json"),
        })
    }

    /// Create a new HistoryManager overriding the base path (for tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { file_path: path }
    }

    /// Read historical records, tolerating a missing or corrupt file.
    pub fn load_history(&self) -> Result<Vec<CallHistory>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.file_path).map_err(|e| {
            HarnessError::FileError(format!(
                "Failed to open history file {:?}: {}",
                self.file_path, e
            ))
        })?;
        let reader = BufReader::new(file);
        let history: Vec<CallHistory> =
            serde_json::from_reader(reader).unwrap_or_else(|_| Vec::new());
        Ok(history)
    }

    /// Append the records of one invocation.
    pub fn append_records(&self, records: &[CallRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        let mut history = self.load_history()?;
        history.extend(records.iter().map(CallHistory::from_record));
        let file = File::create(&self.file_path).map_err(|e| {
            HarnessError::FileError(format!(
                "Failed to create history file {:?}: {}",
                self.file_path, e
            ))
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &history).map_err(|e| {
            HarnessError::FileError(format!(
                "Failed to write history file {:?}: {}",
                self.file_path, e
            ))
        })?;
        crate::logging::log_history_written(
            &self.file_path.to_string_lossy(),
            records.len(),
        );
        Ok(())
    }
}
