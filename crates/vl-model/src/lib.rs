//! vl-model: declarative simulation schema and its validation.

pub mod assignment;
pub mod lab;
pub mod schema;
pub mod snapshot;
pub mod validate;

pub use assignment::{Inputs, OutputAssignment, ValueMap, VariableAssignment};
pub use lab::{Lab, UnknownLab};
pub use schema::*;
pub use snapshot::Snapshot;
pub use validate::{ConfigurationError, validate_definition};
