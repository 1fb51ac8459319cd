//! vl-history: experiment history per lab.
//!
//! A [`HistoryRecorder`] keeps the most recent snapshots in memory and a
//! [`HistoryStore`] persists one JSON file per lab.

pub mod recorder;
pub mod store;

pub use recorder::{DEFAULT_CAPACITY, HistoryRecorder};
pub use store::HistoryStore;

pub type HistoryResult<T> = Result<T, HistoryError>;

#[derive(thiserror::Error, Debug)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
