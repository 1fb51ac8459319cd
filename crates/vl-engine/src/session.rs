//! Per-user session over one selected definition.
//!
//! `Idle -> Assigned -> Assigned* -> Idle`. Outputs are recomputed on every
//! change, and a failed call leaves the session exactly as it was.

use std::sync::Arc;

use vl_core::Real;
use vl_model::{OutputAssignment, SimulationDef, Snapshot, VariableAssignment};

use crate::engine;
use crate::error::{EngineError, EngineResult};
use crate::registry::Registry;

#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Assigned {
        definition: Arc<SimulationDef>,
        assignment: VariableAssignment,
        outputs: OutputAssignment,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    /// Select a definition; the assignment starts over from its defaults.
    pub fn select(&mut self, definition: Arc<SimulationDef>) {
        let assignment = engine::initial_assignment(&definition);
        let outputs = engine::evaluate(&definition, &assignment);
        tracing::debug!(definition = %definition.id, "session selected");
        self.state = SessionState::Assigned {
            definition,
            assignment,
            outputs,
        };
    }

    /// Select by id. An unknown id leaves the session unchanged.
    pub fn select_id(&mut self, registry: &Registry, id: &str) -> EngineResult<()> {
        let definition = registry
            .get_shared(id)
            .ok_or_else(|| EngineError::NotFound { id: id.to_string() })?;
        self.select(definition);
        Ok(())
    }

    pub fn set_variable(&mut self, key: &str, value: Real) -> EngineResult<&OutputAssignment> {
        let SessionState::Assigned {
            definition,
            assignment,
            outputs,
        } = &mut self.state
        else {
            return Err(EngineError::NoSelection);
        };

        let next = engine::set_variable(definition, assignment, key, value)?;
        *outputs = engine::evaluate(definition, &next);
        *assignment = next;
        Ok(outputs)
    }

    pub fn reset(&mut self) -> EngineResult<()> {
        let definition = match &self.state {
            SessionState::Assigned { definition, .. } => Arc::clone(definition),
            SessionState::Idle => return Err(EngineError::NoSelection),
        };
        self.select(definition);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.state = SessionState::Idle;
    }

    pub fn definition(&self) -> Option<&SimulationDef> {
        match &self.state {
            SessionState::Assigned { definition, .. } => Some(definition.as_ref()),
            SessionState::Idle => None,
        }
    }

    pub fn assignment(&self) -> Option<&VariableAssignment> {
        match &self.state {
            SessionState::Assigned { assignment, .. } => Some(assignment),
            SessionState::Idle => None,
        }
    }

    pub fn outputs(&self) -> Option<&OutputAssignment> {
        match &self.state {
            SessionState::Assigned { outputs, .. } => Some(outputs),
            SessionState::Idle => None,
        }
    }

    /// Capture the current pair for the history recorder.
    pub fn snapshot(&self) -> EngineResult<Snapshot> {
        match &self.state {
            SessionState::Assigned {
                definition,
                assignment,
                outputs,
            } => Ok(Snapshot::new(
                definition.id.clone(),
                assignment.clone(),
                outputs.clone(),
            )),
            SessionState::Idle => Err(EngineError::NoSelection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vl_model::{OutputDef, VariableDef};

    fn registry() -> Registry {
        let ke = SimulationDef::builder("ke", "Energy", "Kinetic Energy")
            .variable(VariableDef::new("m", "Mass", 0.0, 200.0, 10.0))
            .variable(VariableDef::new("v", "Velocity", 0.0, 100.0, 15.0))
            .output(OutputDef::new("KE", "Kinetic Energy"))
            .compute(|x| [("KE", 0.5 * x["m"] * x["v"] * x["v"])].into());
        let pe = SimulationDef::builder("pe", "Energy", "Potential Energy")
            .variable(VariableDef::new("m", "Mass", 0.0, 500.0, 50.0))
            .variable(VariableDef::new("h", "Height", 0.0, 100.0, 10.0))
            .output(OutputDef::new("PE", "Potential Energy"))
            .compute(|x| [("PE", x["m"] * 9.81 * x["h"])].into());
        Registry::new(vec![ke, pe]).unwrap()
    }

    #[test]
    fn starts_idle_and_rejects_updates() {
        let mut session = Session::new();
        assert!(session.is_idle());
        assert_eq!(session.set_variable("m", 1.0).unwrap_err(), EngineError::NoSelection);
        assert_eq!(session.reset().unwrap_err(), EngineError::NoSelection);
        assert!(session.snapshot().is_err());
    }

    #[test]
    fn select_update_reset_cycle() {
        let reg = registry();
        let mut session = Session::new();
        session.select_id(&reg, "ke").unwrap();
        assert_eq!(session.outputs().and_then(|o| o.get("KE")), Some(1125.0));

        let ke = session.set_variable("m", 0.0).unwrap().get("KE");
        assert_eq!(ke, Some(0.0));
        assert_eq!(session.assignment().and_then(|a| a.get("m")), Some(0.0));

        session.reset().unwrap();
        assert_eq!(session.assignment().and_then(|a| a.get("m")), Some(10.0));
        assert_eq!(session.outputs().and_then(|o| o.get("KE")), Some(1125.0));

        session.deselect();
        assert!(session.is_idle());
        assert!(session.outputs().is_none());
    }

    #[test]
    fn failed_calls_leave_state_untouched() {
        let reg = registry();
        let mut session = Session::new();
        session.select_id(&reg, "ke").unwrap();
        session.set_variable("v", 2.0).unwrap();

        assert!(session.set_variable("mass", 3.0).is_err());
        assert!(session.select_id(&reg, "nope").is_err());

        assert_eq!(session.definition().map(|d| d.id.as_str()), Some("ke"));
        assert_eq!(session.assignment().and_then(|a| a.get("v")), Some(2.0));
        assert_eq!(session.outputs().and_then(|o| o.get("KE")), Some(20.0));
    }

    #[test]
    fn switching_definition_discards_assignment() {
        let reg = registry();
        let mut session = Session::new();
        session.select_id(&reg, "ke").unwrap();
        session.set_variable("m", 1.0).unwrap();
        session.select_id(&reg, "pe").unwrap();

        let a = session.assignment().unwrap();
        assert_eq!(a.get("m"), Some(50.0));
        assert!(!a.contains_key("v"));
    }

    #[test]
    fn snapshot_copies_current_pair() {
        let reg = registry();
        let mut session = Session::new();
        session.select_id(&reg, "pe").unwrap();
        session.set_variable("h", 2.0).unwrap();
        let snap = session.snapshot().unwrap();
        assert_eq!(snap.definition_id, "pe");
        assert_eq!(snap.variables.get("h"), Some(2.0));
        assert_eq!(snap.outputs.get("PE"), Some(50.0 * 9.81 * 2.0));
    }
}
