//! Simulation definition schema.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use vl_core::Real;

use crate::assignment::{Inputs, OutputAssignment};

/// Pure formula mapping a variable assignment to its outputs.
pub type ComputeFn = Arc<dyn Fn(&Inputs<'_>) -> OutputAssignment + Send + Sync>;

/// One bounded scalar input of a simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariableDef {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub min: Real,
    pub max: Real,
    pub default: Real,
    /// Slider increment, counted from `min`. Only the presentation layer honours it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<Real>,
}

impl VariableDef {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        min: Real,
        max: Real,
        default: Real,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            unit: None,
            min,
            max,
            default,
            step: None,
        }
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn step(mut self, step: Real) -> Self {
        self.step = Some(step);
        self
    }

    /// True when `value` lies inside `[min, max]`.
    pub fn contains(&self, value: Real) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamp into `[min, max]` for callers that want slider semantics.
    ///
    /// The engine never clamps; this is for the presentation layer.
    pub fn clamp(&self, value: Real) -> Real {
        value.max(self.min).min(self.max)
    }
}

/// One named scalar result of a simulation. Outputs carry no range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputDef {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl OutputDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            unit: None,
        }
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Immutable description of one simulation: identity, text, inputs, outputs
/// and the formula tying them together.
#[derive(Clone)]
pub struct SimulationDef {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub formula: Option<String>,
    pub variables: Vec<VariableDef>,
    pub outputs: Vec<OutputDef>,
    compute: ComputeFn,
}

impl SimulationDef {
    pub fn builder(
        id: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> SimulationDefBuilder {
        SimulationDefBuilder {
            id: id.into(),
            category: category.into(),
            name: name.into(),
            description: String::new(),
            formula: None,
            variables: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Run the formula. Never inspects or rejects the values it returns.
    pub fn compute(&self, inputs: &Inputs<'_>) -> OutputAssignment {
        (self.compute)(inputs)
    }

    pub fn variable(&self, key: &str) -> Option<&VariableDef> {
        self.variables.iter().find(|v| v.key == key)
    }

    pub fn output(&self, key: &str) -> Option<&OutputDef> {
        self.outputs.iter().find(|o| o.key == key)
    }

    pub fn has_variable(&self, key: &str) -> bool {
        self.variable(key).is_some()
    }

    pub fn variable_keys(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|v| v.key.as_str())
    }
}

impl fmt::Debug for SimulationDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationDef")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("name", &self.name)
            .field("variables", &self.variables)
            .field("outputs", &self.outputs)
            .finish_non_exhaustive()
    }
}

pub struct SimulationDefBuilder {
    id: String,
    category: String,
    name: String,
    description: String,
    formula: Option<String>,
    variables: Vec<VariableDef>,
    outputs: Vec<OutputDef>,
}

impl SimulationDefBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn variable(mut self, variable: VariableDef) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn output(mut self, output: OutputDef) -> Self {
        self.outputs.push(output);
        self
    }

    /// Attach the formula and finish the definition.
    ///
    /// Nothing is validated here; the registry checks every definition when
    /// it is built.
    pub fn compute<F>(self, f: F) -> SimulationDef
    where
        F: Fn(&Inputs<'_>) -> OutputAssignment + Send + Sync + 'static,
    {
        SimulationDef {
            id: self.id,
            category: self.category,
            name: self.name,
            description: self.description,
            formula: self.formula,
            variables: self.variables,
            outputs: self.outputs,
            compute: Arc::new(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::VariableAssignment;

    fn kinetic_energy() -> SimulationDef {
        SimulationDef::builder("ke", "Energy", "Kinetic Energy")
            .description("KE = 1/2 m v^2")
            .variable(VariableDef::new("m", "Mass", 0.0, 200.0, 10.0).unit("kg"))
            .variable(VariableDef::new("v", "Velocity", 0.0, 100.0, 15.0).unit("m/s"))
            .output(OutputDef::new("KE", "Kinetic Energy").unit("J"))
            .compute(|x| [("KE", 0.5 * x["m"] * x["v"] * x["v"])].into())
    }

    #[test]
    fn builder_keeps_declaration_order() {
        let def = kinetic_energy();
        let keys: Vec<&str> = def.variable_keys().collect();
        assert_eq!(keys, vec!["m", "v"]);
        assert_eq!(def.output("KE").and_then(|o| o.unit.as_deref()), Some("J"));
        assert!(def.formula.is_none());
    }

    #[test]
    fn compute_runs_formula() {
        let def = kinetic_energy();
        let vars = VariableAssignment::from_defaults(&def);
        let out = def.compute(&Inputs::new(&vars));
        assert_eq!(out.get("KE"), Some(1125.0));
    }

    #[test]
    fn clamp_is_a_helper_only() {
        let v = VariableDef::new("x", "X", -1.0, 1.0, 0.0);
        assert_eq!(v.clamp(5.0), 1.0);
        assert_eq!(v.clamp(-5.0), -1.0);
        assert!(v.contains(0.5));
        assert!(!v.contains(1.5));
    }

    #[test]
    fn debug_omits_formula_closure() {
        let text = format!("{:?}", kinetic_energy());
        assert!(text.contains("Kinetic Energy"));
        assert!(text.ends_with(".. }"));
    }
}
