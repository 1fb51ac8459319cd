//! vl-chem: the chemistry mixing bench.
//!
//! Contains:
//! - reagent (the bench chemicals and their demo pH / concentration)
//! - mixture (reagents in the beaker, pH estimate, known reactions)
//! - analysis (request/response types for the reaction-analysis proxy)

pub mod analysis;
pub mod mixture;
pub mod reagent;

pub use analysis::{
    ANALYSIS_TIMEOUT, AnalysisError, AnalysisRequest, AnalysisResponse, AnalysisResult,
    ReactionContext, normalize_text, split_model_text,
};
pub use mixture::{
    DEFAULT_VOLUME_ML, KnownReaction, Mixture, MixtureEntry, NO_REACTION, known_reaction,
};
pub use reagent::{BENCH, Reagent, find, search};
