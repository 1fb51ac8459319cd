//! Evaluation with command-line style overrides.

use vl_core::Real;
use vl_model::{OutputAssignment, SimulationDef, Snapshot, VariableAssignment};

use crate::error::{AppError, AppResult};

/// One `key=value` override.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub key: String,
    pub value: Real,
}

/// Parse `key=value`. The value goes through `f64` parsing, so `NaN` and
/// `inf` are accepted.
pub fn parse_override(text: &str) -> AppResult<Override> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| AppError::InvalidInput(format!("expected key=value, got '{text}'")))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::InvalidInput(format!("missing key in '{text}'")));
    }
    let value: Real = value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a number", value.trim())))?;

    Ok(Override {
        key: key.to_string(),
        value,
    })
}

/// Assignment and outputs of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub definition_id: String,
    pub variables: VariableAssignment,
    pub outputs: OutputAssignment,
}

impl Evaluation {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.definition_id.clone(),
            self.variables.clone(),
            self.outputs.clone(),
        )
    }
}

/// Start from the defaults, apply `overrides` in order, evaluate once.
///
/// Out-of-range values are applied as given. An unknown key fails the whole
/// call.
pub fn evaluate_with_overrides(def: &SimulationDef, overrides: &[Override]) -> AppResult<Evaluation> {
    let mut variables = vl_engine::initial_assignment(def);
    for o in overrides {
        variables = vl_engine::set_variable(def, &variables, &o.key, o.value)?;
        if let Some(variable) = def.variable(&o.key)
            && !variable.contains(o.value)
        {
            tracing::warn!(
                definition = %def.id,
                key = %o.key,
                value = o.value,
                min = variable.min,
                max = variable.max,
                "override outside slider range"
            );
        }
    }

    let outputs = vl_engine::evaluate(def, &variables);
    Ok(Evaluation {
        definition_id: def.id.clone(),
        variables,
        outputs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vl_engine::EngineError;
    use vl_model::{OutputDef, VariableDef};

    fn kinetic_energy() -> SimulationDef {
        SimulationDef::builder("sim03", "Energy", "Kinetic Energy")
            .variable(VariableDef::new("m", "Mass", 0.0, 200.0, 10.0))
            .variable(VariableDef::new("v", "Velocity", 0.0, 100.0, 15.0))
            .output(OutputDef::new("KE", "Kinetic Energy"))
            .compute(|x| [("KE", 0.5 * x["m"] * x["v"] * x["v"])].into())
    }

    #[test]
    fn parse_override_forms() {
        assert_eq!(
            parse_override(" m = 2.5 ").unwrap(),
            Override {
                key: "m".into(),
                value: 2.5
            }
        );
        assert!(parse_override("m").is_err());
        assert!(parse_override("=3").is_err());
        assert!(matches!(parse_override("m=heavy"), Err(AppError::InvalidInput(_))));
        assert!(parse_override("m=NaN").unwrap().value.is_nan());
    }

    #[test]
    fn overrides_apply_in_order() {
        let def = kinetic_energy();
        let overrides = [parse_override("m=1").unwrap(), parse_override("m=2").unwrap()];
        let eval = evaluate_with_overrides(&def, &overrides).unwrap();
        assert_eq!(eval.variables.get("m"), Some(2.0));
        assert_eq!(eval.outputs.get("KE"), Some(225.0));
        assert_eq!(eval.snapshot().definition_id, "sim03");
    }

    #[test]
    fn unknown_key_fails() {
        let def = kinetic_energy();
        let err = evaluate_with_overrides(&def, &[parse_override("mass=1").unwrap()]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Engine(EngineError::UnknownVariableKey { .. })
        ));
    }
}
