//! Listing helpers over a lab registry.

use vl_engine::{Query, Registry, filter};
use vl_model::SimulationDef;

/// Summary of a definition for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionSummary {
    pub id: String,
    pub category: String,
    pub name: String,
    pub variable_count: usize,
    pub output_count: usize,
}

impl From<&SimulationDef> for DefinitionSummary {
    fn from(def: &SimulationDef) -> Self {
        Self {
            id: def.id.clone(),
            category: def.category.clone(),
            name: def.name.clone(),
            variable_count: def.variables.len(),
            output_count: def.outputs.len(),
        }
    }
}

/// Definitions matching `query`, in registry order.
pub fn list_definitions(registry: &Registry, query: &Query) -> Vec<DefinitionSummary> {
    filter(registry, query)
        .into_iter()
        .map(DefinitionSummary::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vl_engine::CategoryFilter;
    use vl_model::Lab;

    #[test]
    fn lists_biology_by_category() {
        let registry = Registry::new(vl_catalog::definitions(Lab::Biology)).unwrap();
        let all = list_definitions(&registry, &Query::default());
        assert_eq!(all.len(), 14);
        assert_eq!(all.last().map(|s| s.id.as_str()), Some("bio14"));

        let genetics = list_definitions(
            &registry,
            &Query::new("", CategoryFilter::Named("Genetics".into())),
        );
        assert_eq!(genetics.len(), 2);
        assert!(genetics.iter().all(|s| s.category == "Genetics"));
    }
}
