//! vl-engine: simulation registry, selection filter and evaluation engine.
//!
//! The registry is built once at startup and shared read-only; every session
//! owns its own variable assignment.

pub mod engine;
pub mod error;
pub mod filter;
pub mod registry;
pub mod session;

pub use engine::{evaluate, initial_assignment, reset, set_variable};
pub use error::{EngineError, EngineResult};
pub use filter::{CategoryFilter, Query, filter};
pub use registry::Registry;
pub use session::{Session, SessionState};
