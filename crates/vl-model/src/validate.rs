//! Definition validation, run once when a registry is built.

use std::collections::HashSet;

use vl_core::Real;

use crate::assignment::{Inputs, VariableAssignment};
use crate::schema::{SimulationDef, VariableDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Duplicate definition id: {id}")]
    DuplicateId { id: String },

    #[error("Empty {field} in definition '{definition_id}'")]
    EmptyField {
        definition_id: String,
        field: &'static str,
    },

    #[error("Duplicate variable key '{key}' in definition '{definition_id}'")]
    DuplicateVariableKey { definition_id: String, key: String },

    #[error("Duplicate output key '{key}' in definition '{definition_id}'")]
    DuplicateOutputKey { definition_id: String, key: String },

    #[error("Invalid range for '{key}' in definition '{definition_id}': min={min}, max={max}")]
    InvalidRange {
        definition_id: String,
        key: String,
        min: Real,
        max: Real,
    },

    #[error(
        "Default {default} of '{key}' in definition '{definition_id}' is outside [{min}, {max}]"
    )]
    DefaultOutOfRange {
        definition_id: String,
        key: String,
        default: Real,
        min: Real,
        max: Real,
    },

    #[error("Step {step} of '{key}' in definition '{definition_id}' must be positive")]
    InvalidStep {
        definition_id: String,
        key: String,
        step: Real,
    },

    #[error("Definition '{definition_id}' reads undeclared input '{key}'")]
    UndeclaredInput { definition_id: String, key: String },

    #[error("Definition '{definition_id}' does not produce declared output '{key}'")]
    MissingOutput { definition_id: String, key: String },
}

pub fn validate_definition(def: &SimulationDef) -> Result<(), ConfigurationError> {
    let empty = |field: &'static str| ConfigurationError::EmptyField {
        definition_id: def.id.clone(),
        field,
    };
    if def.id.trim().is_empty() {
        return Err(empty("id"));
    }
    if def.name.trim().is_empty() {
        return Err(empty("name"));
    }

    let mut variable_keys = HashSet::new();
    for variable in &def.variables {
        if variable.key.is_empty() {
            return Err(empty("variable key"));
        }
        if variable.label.is_empty() {
            return Err(empty("variable label"));
        }
        if !variable_keys.insert(variable.key.as_str()) {
            return Err(ConfigurationError::DuplicateVariableKey {
                definition_id: def.id.clone(),
                key: variable.key.clone(),
            });
        }
        validate_variable(&def.id, variable)?;
    }

    let mut output_keys = HashSet::new();
    for output in &def.outputs {
        if output.key.is_empty() {
            return Err(empty("output key"));
        }
        if output.label.is_empty() {
            return Err(empty("output label"));
        }
        if !output_keys.insert(output.key.as_str()) {
            return Err(ConfigurationError::DuplicateOutputKey {
                definition_id: def.id.clone(),
                key: output.key.clone(),
            });
        }
    }

    check_compute(def)
}

fn validate_variable(definition_id: &str, variable: &VariableDef) -> Result<(), ConfigurationError> {
    if !variable.min.is_finite() || !variable.max.is_finite() || variable.min > variable.max {
        return Err(ConfigurationError::InvalidRange {
            definition_id: definition_id.to_string(),
            key: variable.key.clone(),
            min: variable.min,
            max: variable.max,
        });
    }

    // NaN defaults fail `contains` as well
    if !variable.contains(variable.default) {
        return Err(ConfigurationError::DefaultOutOfRange {
            definition_id: definition_id.to_string(),
            key: variable.key.clone(),
            default: variable.default,
            min: variable.min,
            max: variable.max,
        });
    }

    if let Some(step) = variable.step
        && !(step.is_finite() && step > 0.0)
    {
        return Err(ConfigurationError::InvalidStep {
            definition_id: definition_id.to_string(),
            key: variable.key.clone(),
            step,
        });
    }

    Ok(())
}

/// Assignments the formula is checked at: the defaults, then each variable
/// moved to its `min` and its `max` with the others at their defaults.
fn sample_points(def: &SimulationDef) -> Vec<VariableAssignment> {
    let defaults = VariableAssignment::from_defaults(def);
    let mut points = Vec::with_capacity(1 + 2 * def.variables.len());
    for variable in &def.variables {
        for edge in [variable.min, variable.max] {
            if edge != variable.default
                && let Some(moved) = defaults.with_value(&variable.key, edge)
            {
                points.push(moved);
            }
        }
    }
    points.insert(0, defaults);
    points
}

/// Evaluate the formula at every sample point and check each result against
/// the declared schema. Catches undeclared keys read only inside a branch.
fn check_compute(def: &SimulationDef) -> Result<(), ConfigurationError> {
    for vars in sample_points(def) {
        let inputs = Inputs::new(&vars);
        let outputs = def.compute(&inputs);

        if let Some(key) = inputs.undeclared_reads().into_iter().next() {
            return Err(ConfigurationError::UndeclaredInput {
                definition_id: def.id.clone(),
                key,
            });
        }

        if let Some(missing) = def.outputs.iter().find(|o| !outputs.contains_key(&o.key)) {
            return Err(ConfigurationError::MissingOutput {
                definition_id: def.id.clone(),
                key: missing.key.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OutputDef;

    fn base() -> crate::schema::SimulationDefBuilder {
        SimulationDef::builder("d1", "Test", "Doubler")
            .variable(VariableDef::new("x", "X", 0.0, 10.0, 2.0))
            .output(OutputDef::new("y", "Y"))
    }

    #[test]
    fn valid_definition_passes() {
        let def = base().compute(|x| [("y", 2.0 * x["x"])].into());
        assert_eq!(validate_definition(&def), Ok(()));
    }

    #[test]
    fn duplicate_variable_key_rejected() {
        let def = base()
            .variable(VariableDef::new("x", "X again", 0.0, 1.0, 0.5))
            .compute(|x| [("y", x["x"])].into());
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::DuplicateVariableKey { key, .. }) if key == "x"
        ));
    }

    #[test]
    fn duplicate_output_key_rejected() {
        let def = base()
            .output(OutputDef::new("y", "Y again"))
            .compute(|x| [("y", x["x"])].into());
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::DuplicateOutputKey { .. })
        ));
    }

    #[test]
    fn default_outside_range_rejected() {
        let def = SimulationDef::builder("d2", "Test", "Bad default")
            .variable(VariableDef::new("x", "X", 0.0, 1.0, 5.0))
            .compute(|_| crate::OutputAssignment::new());
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::DefaultOutOfRange { default, .. }) if default == 5.0
        ));
    }

    #[test]
    fn inverted_range_rejected() {
        let def = SimulationDef::builder("d3", "Test", "Inverted")
            .variable(VariableDef::new("x", "X", 2.0, 1.0, 1.5))
            .compute(|_| crate::OutputAssignment::new());
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn zero_step_rejected() {
        let def = SimulationDef::builder("d4", "Test", "Step")
            .variable(VariableDef::new("x", "X", 0.0, 1.0, 0.5).step(0.0))
            .compute(|_| crate::OutputAssignment::new());
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::InvalidStep { .. })
        ));
    }

    #[test]
    fn undeclared_input_rejected() {
        let def = base().compute(|x| [("y", x["x"] * x["mass"])].into());
        assert_eq!(
            validate_definition(&def),
            Err(ConfigurationError::UndeclaredInput {
                definition_id: "d1".to_string(),
                key: "mass".to_string(),
            })
        );
    }

    #[test]
    fn undeclared_input_in_upper_branch_rejected() {
        let def = base().compute(|x| {
            let y = if x["x"] > 5.0 { x["mass"] } else { x["x"] };
            [("y", y)].into()
        });
        assert_eq!(
            validate_definition(&def),
            Err(ConfigurationError::UndeclaredInput {
                definition_id: "d1".to_string(),
                key: "mass".to_string(),
            })
        );
    }

    #[test]
    fn undeclared_input_in_lower_branch_rejected() {
        let def = base().compute(|x| {
            let y = if x["x"] <= 0.0 { x["offset"] } else { 2.0 * x["x"] };
            [("y", y)].into()
        });
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::UndeclaredInput { key, .. }) if key == "offset"
        ));
    }

    #[test]
    fn output_dropped_at_range_edge_rejected() {
        let def = base().compute(|x| {
            if x["x"] >= 10.0 {
                crate::OutputAssignment::new()
            } else {
                [("y", x["x"])].into()
            }
        });
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::MissingOutput { key, .. }) if key == "y"
        ));
    }

    #[test]
    fn sample_points_cover_each_edge() {
        let def = base()
            .variable(VariableDef::new("z", "Z", 0.0, 1.0, 0.0))
            .compute(|x| [("y", x["x"] + x["z"])].into());
        let points = sample_points(&def);
        // defaults, x at 0 and 10, z at 1 (its min is the default)
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], VariableAssignment::from_defaults(&def));
        assert!(points.iter().any(|p| p.get("x") == Some(10.0) && p.get("z") == Some(0.0)));
        assert!(points.iter().any(|p| p.get("z") == Some(1.0)));
    }

    #[test]
    fn missing_output_rejected() {
        let def = base().compute(|x| [("z", x["x"])].into());
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::MissingOutput { key, .. }) if key == "y"
        ));
    }

    #[test]
    fn non_finite_output_is_still_valid() {
        let def = base().compute(|_| [("y", Real::NAN)].into());
        assert_eq!(validate_definition(&def), Ok(()));
    }

    #[test]
    fn empty_id_rejected() {
        let def = SimulationDef::builder("  ", "Test", "Nameless").compute(|_| crate::OutputAssignment::new());
        assert!(matches!(
            validate_definition(&def),
            Err(ConfigurationError::EmptyField { field: "id", .. })
        ));
    }
}
