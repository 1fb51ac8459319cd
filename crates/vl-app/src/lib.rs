//! Shared application service layer for the virtual lab.
//!
//! Front ends go through this crate for configuration, the per-lab
//! registries, evaluation with overrides, experiment history and the
//! bench experiments.

pub mod bench_service;
pub mod config;
pub mod error;
pub mod history_service;
pub mod lab_service;
pub mod query;
pub mod run_service;

pub use bench_service::{
    analysis_request, build_circuit, build_mixture, express_dna, launch, parse_component_spec,
    parse_reagent_spec,
};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use history_service::{clear_history, list_history, record_snapshot};
pub use lab_service::Labs;
pub use query::{DefinitionSummary, list_definitions};
pub use run_service::{Evaluation, Override, evaluate_with_overrides, parse_override};
