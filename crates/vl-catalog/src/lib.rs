//! vl-catalog: the simulation tables for the three labs.
//!
//! Every table is plain data: a list of [`SimulationDef`] literals built in
//! registration order. Nothing here is validated; the registry does that
//! when the tables are loaded.

mod biology;
mod chemistry;
mod physics;

pub use biology::biology;
pub use chemistry::chemistry;
pub use physics::bench::{
    Circuit, CircuitReading, Component, ComponentKind, Connection, Flight, Launch,
    TRAJECTORY_STEP_S,
};
pub use physics::physics;

use vl_model::{Lab, OutputDef, SimulationDef, VariableDef};

/// Definitions for one lab, in catalog order.
pub fn definitions(lab: Lab) -> Vec<SimulationDef> {
    let defs = match lab {
        Lab::Chemistry => chemistry(),
        Lab::Physics => physics(),
        Lab::Biology => biology(),
    };
    tracing::debug!(%lab, count = defs.len(), "catalog loaded");
    defs
}

pub(crate) fn var(key: &str, label: &str, min: f64, max: f64, default: f64) -> VariableDef {
    VariableDef::new(key, label, min, max, default)
}

pub(crate) fn out(key: &str, label: &str) -> OutputDef {
    OutputDef::new(key, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_tables() {
        assert_eq!(definitions(Lab::Physics).len(), physics().len());
        assert_eq!(definitions(Lab::Biology).len(), biology().len());
        assert_eq!(definitions(Lab::Chemistry).len(), chemistry().len());
    }
}
