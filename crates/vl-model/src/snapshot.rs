//! Snapshot record handed to the history recorder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assignment::{OutputAssignment, VariableAssignment};

/// One saved evaluation: which simulation, what went in, what came out, when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: Uuid,
    pub definition_id: String,
    #[serde(rename = "variableAssignment")]
    pub variables: VariableAssignment,
    #[serde(rename = "outputAssignment")]
    pub outputs: OutputAssignment,
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(
        definition_id: impl Into<String>,
        variables: VariableAssignment,
        outputs: OutputAssignment,
    ) -> Self {
        Self::at(definition_id, variables, outputs, Utc::now())
    }

    pub fn at(
        definition_id: impl Into<String>,
        variables: VariableAssignment,
        outputs: OutputAssignment,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            definition_id: definition_id.into(),
            variables,
            outputs,
            timestamp,
        }
    }
}
