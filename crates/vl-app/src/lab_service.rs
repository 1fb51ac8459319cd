//! Per-lab registries, built once at startup.

use vl_engine::Registry;
use vl_model::{Lab, SimulationDef};

use crate::error::{AppError, AppResult};

/// One validated registry per lab.
#[derive(Debug)]
pub struct Labs {
    chemistry: Registry,
    physics: Registry,
    biology: Registry,
}

impl Labs {
    /// Build every lab's registry from the catalog. Any invalid definition
    /// fails the whole load.
    pub fn load() -> AppResult<Self> {
        let build = |lab: Lab| Registry::new(vl_catalog::definitions(lab));
        let labs = Self {
            chemistry: build(Lab::Chemistry)?,
            physics: build(Lab::Physics)?,
            biology: build(Lab::Biology)?,
        };
        tracing::info!(
            chemistry = labs.chemistry.len(),
            physics = labs.physics.len(),
            biology = labs.biology.len(),
            "labs loaded"
        );
        Ok(labs)
    }

    pub fn registry(&self, lab: Lab) -> &Registry {
        match lab {
            Lab::Chemistry => &self.chemistry,
            Lab::Physics => &self.physics,
            Lab::Biology => &self.biology,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Lab, &Registry)> {
        Lab::ALL.into_iter().map(|lab| (lab, self.registry(lab)))
    }

    /// Find a definition by id across all labs.
    pub fn find(&self, id: &str) -> Option<(Lab, &SimulationDef)> {
        self.iter()
            .find_map(|(lab, registry)| registry.get(id).map(|def| (lab, def)))
    }

    pub fn require(&self, id: &str) -> AppResult<(Lab, &SimulationDef)> {
        self.find(id).ok_or_else(|| AppError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_reports_owning_lab() {
        let labs = Labs::load().unwrap();
        assert_eq!(labs.find("sim01").map(|(lab, _)| lab), Some(Lab::Physics));
        assert_eq!(labs.find("bio13").map(|(lab, _)| lab), Some(Lab::Biology));
        assert_eq!(labs.find("chem01").map(|(lab, _)| lab), Some(Lab::Chemistry));
        assert!(labs.find("sim999").is_none());
        assert!(matches!(labs.require("nope"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn registry_per_lab() {
        let labs = Labs::load().unwrap();
        assert_eq!(labs.registry(Lab::Physics).len(), 103);
        assert_eq!(labs.registry(Lab::Biology).len(), 14);
        assert_eq!(labs.iter().count(), 3);
    }
}
