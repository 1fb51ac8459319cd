//! Error types for the vl-app service layer.

use std::path::PathBuf;

/// Application error wrapping the backend crates' errors so front ends
/// deal with one type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Catalog configuration error: {0}")]
    Configuration(#[from] vl_model::ConfigurationError),

    #[error(transparent)]
    UnknownLab(#[from] vl_model::UnknownLab),

    #[error("Simulation not found: {0}")]
    NotFound(String),

    #[error("Engine error: {0}")]
    Engine(#[from] vl_engine::EngineError),

    #[error("History error: {0}")]
    History(#[from] vl_history::HistoryError),

    #[error("Unknown reagent: {0}")]
    UnknownReagent(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] vl_chem::AnalysisError),

    #[error("Genetics error: {0}")]
    Genetics(#[from] vl_bio::GeneticsError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for vl-app operations.
pub type AppResult<T> = Result<T, AppError>;
