//! Physics lab: `sim01` through `sim100`, then the bench experiments
//! `sim101` through `sim103`.

pub mod bench;
mod classical;
mod extended;
mod named;

use vl_model::SimulationDef;

pub fn physics() -> Vec<SimulationDef> {
    let mut defs = classical::definitions();
    defs.extend(named::definitions());
    defs.extend(extended::definitions());
    defs.extend(bench::definitions());
    defs
}
