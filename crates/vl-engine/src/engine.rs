//! Evaluation engine: seed, update and evaluate variable assignments.

use vl_core::Real;
use vl_model::{Inputs, OutputAssignment, SimulationDef, VariableAssignment};

use crate::error::{EngineError, EngineResult};

/// Every declared variable at its default, nothing else.
pub fn initial_assignment(def: &SimulationDef) -> VariableAssignment {
    VariableAssignment::from_defaults(def)
}

/// Same as [`initial_assignment`]; named for the user-facing reset action.
pub fn reset(def: &SimulationDef) -> VariableAssignment {
    initial_assignment(def)
}

/// New assignment with `key` set to `value`.
///
/// `value` is not clamped to the variable's range. Unknown keys are a caller
/// bug and fail without touching `assignment`.
pub fn set_variable(
    def: &SimulationDef,
    assignment: &VariableAssignment,
    key: &str,
    value: Real,
) -> EngineResult<VariableAssignment> {
    let unknown = || EngineError::UnknownVariableKey {
        definition_id: def.id.clone(),
        key: key.to_string(),
    };

    if !def.has_variable(key) {
        tracing::warn!(definition = %def.id, key, "rejected update of unknown variable");
        return Err(unknown());
    }
    assignment.with_value(key, value).ok_or_else(unknown)
}

/// Run the definition's formula and return its result verbatim.
pub fn evaluate(def: &SimulationDef, assignment: &VariableAssignment) -> OutputAssignment {
    let inputs = Inputs::new(assignment);
    let outputs = def.compute(&inputs);
    tracing::debug!(definition = %def.id, outputs = outputs.len(), "evaluated");
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use vl_model::{OutputDef, VariableDef};

    fn kinetic_energy() -> SimulationDef {
        SimulationDef::builder("sim03", "Energy", "Kinetic Energy")
            .variable(VariableDef::new("m", "Mass", 0.0, 200.0, 10.0).unit("kg"))
            .variable(VariableDef::new("v", "Velocity", 0.0, 100.0, 15.0).unit("m/s"))
            .output(OutputDef::new("KE", "Kinetic Energy").unit("J"))
            .compute(|x| [("KE", 0.5 * x["m"] * x["v"] * x["v"])].into())
    }

    #[test]
    fn initial_assignment_matches_defaults() {
        let def = kinetic_energy();
        let a = initial_assignment(&def);
        assert_eq!(a.len(), 2);
        assert_eq!(a.get("m"), Some(10.0));
        assert_eq!(a.get("v"), Some(15.0));
        assert_eq!(reset(&def), a);
    }

    #[test]
    fn out_of_range_values_flow_through() {
        let def = kinetic_energy();
        let a = set_variable(&def, &initial_assignment(&def), "v", 150.0).unwrap();
        assert_eq!(a.get("v"), Some(150.0));
        assert_eq!(evaluate(&def, &a).get("KE"), Some(0.5 * 10.0 * 150.0 * 150.0));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let def = kinetic_energy();
        let a = initial_assignment(&def);
        let err = set_variable(&def, &a, "mass", 3.0).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownVariableKey {
                definition_id: "sim03".to_string(),
                key: "mass".to_string(),
            }
        );
        assert_eq!(a, initial_assignment(&def));
    }

    #[test]
    fn evaluate_preserves_non_finite() {
        let def = SimulationDef::builder("div", "Test", "Divide")
            .variable(VariableDef::new("d", "D", -1.0, 1.0, 1.0))
            .output(OutputDef::new("q", "Q"))
            .compute(|x| [("q", 1.0 / x["d"])].into());
        let a = set_variable(&def, &initial_assignment(&def), "d", 0.0).unwrap();
        assert_eq!(evaluate(&def, &a).get("q"), Some(Real::INFINITY));
    }
}
