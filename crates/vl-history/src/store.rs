//! Per-lab history files.

use std::fs;
use std::path::{Path, PathBuf};

use vl_model::{Lab, Snapshot};

use crate::HistoryResult;
use crate::recorder::HistoryRecorder;

/// One `<storage_key>.json` file per lab under `root_dir`, holding a JSON
/// array of snapshots, most recent first.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    root_dir: PathBuf,
}

impl HistoryStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn path_for(&self, lab: Lab) -> PathBuf {
        self.root_dir.join(format!("{}.json", lab.storage_key()))
    }

    /// Missing file loads as an empty recorder. Entries past `capacity`
    /// (the oldest ones) are dropped.
    pub fn load(&self, lab: Lab, capacity: usize) -> HistoryResult<HistoryRecorder> {
        let path = self.path_for(lab);
        if !path.exists() {
            return Ok(HistoryRecorder::new(capacity));
        }

        let content = fs::read_to_string(&path)?;
        let snapshots: Vec<Snapshot> = if content.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&content)?
        };
        tracing::debug!(%lab, entries = snapshots.len(), path = %path.display(), "history loaded");
        Ok(HistoryRecorder::from_recent(capacity, snapshots))
    }

    pub fn save(&self, lab: Lab, recorder: &HistoryRecorder) -> HistoryResult<()> {
        fs::create_dir_all(&self.root_dir)?;
        let snapshots: Vec<&Snapshot> = recorder.list().collect();
        let json = serde_json::to_string_pretty(&snapshots)?;
        let path = self.path_for(lab);
        fs::write(&path, json)?;
        tracing::debug!(%lab, entries = snapshots.len(), path = %path.display(), "history saved");
        Ok(())
    }

    pub fn clear(&self, lab: Lab) -> HistoryResult<()> {
        let path = self.path_for(lab);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
