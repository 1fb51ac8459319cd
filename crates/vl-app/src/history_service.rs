//! Experiment history per lab.

use vl_history::{HistoryError, HistoryRecorder, HistoryStore};
use vl_model::{Lab, Snapshot};

use crate::config::AppConfig;
use crate::error::AppResult;

/// Load a lab's history; an unreadable file is logged and treated as empty
/// so a corrupt history never blocks the lab.
fn load_or_empty(store: &HistoryStore, lab: Lab, capacity: usize) -> AppResult<HistoryRecorder> {
    match store.load(lab, capacity) {
        Ok(recorder) => Ok(recorder),
        Err(HistoryError::Json(err)) => {
            tracing::warn!(
                %lab,
                path = %store.path_for(lab).display(),
                error = %err,
                "history file unreadable, starting empty"
            );
            Ok(HistoryRecorder::new(capacity))
        }
        Err(err) => Err(err.into()),
    }
}

/// Append `snapshot` to the lab's history and persist it.
pub fn record_snapshot(config: &AppConfig, lab: Lab, snapshot: Snapshot) -> AppResult<()> {
    let store = config.history_store();
    let mut recorder = load_or_empty(&store, lab, config.history_capacity)?;
    tracing::info!(%lab, definition = %snapshot.definition_id, id = %snapshot.id, "snapshot recorded");
    recorder.record(snapshot);
    store.save(lab, &recorder)?;
    Ok(())
}

/// Saved snapshots, most recent first.
pub fn list_history(config: &AppConfig, lab: Lab) -> AppResult<Vec<Snapshot>> {
    let store = config.history_store();
    let recorder = load_or_empty(&store, lab, config.history_capacity)?;
    Ok(recorder.list().cloned().collect())
}

pub fn clear_history(config: &AppConfig, lab: Lab) -> AppResult<()> {
    config.history_store().clear(lab)?;
    Ok(())
}
