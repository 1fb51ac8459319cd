//! Immutable catalog of simulation definitions.

use std::collections::HashMap;
use std::sync::Arc;

use vl_model::{ConfigurationError, SimulationDef, validate_definition};

use crate::error::{EngineError, EngineResult};
use crate::filter::CategoryFilter;

/// Ordered, read-only set of definitions with globally unique ids.
///
/// Built once; there is no way to add or remove entries afterwards.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: Vec<Arc<SimulationDef>>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Validate every definition and build the registry.
    ///
    /// Fails on the first duplicate id or invalid definition.
    pub fn new(definitions: Vec<SimulationDef>) -> Result<Self, ConfigurationError> {
        let mut index = HashMap::with_capacity(definitions.len());
        let mut stored = Vec::with_capacity(definitions.len());

        for def in definitions {
            validate_definition(&def)?;
            if index.contains_key(&def.id) {
                return Err(ConfigurationError::DuplicateId { id: def.id });
            }
            index.insert(def.id.clone(), stored.len());
            stored.push(Arc::new(def));
        }

        tracing::info!(definitions = stored.len(), "simulation registry built");
        Ok(Self {
            definitions: stored,
            index,
        })
    }

    /// Exact lookup; `None` for an unknown id is an ordinary outcome.
    pub fn get(&self, id: &str) -> Option<&SimulationDef> {
        self.index.get(id).map(|&i| self.definitions[i].as_ref())
    }

    /// Shared handle, for sessions that outlive a borrow of the registry.
    pub fn get_shared(&self, id: &str) -> Option<Arc<SimulationDef>> {
        self.index.get(id).map(|&i| Arc::clone(&self.definitions[i]))
    }

    pub fn require(&self, id: &str) -> EngineResult<&SimulationDef> {
        self.get(id).ok_or_else(|| EngineError::NotFound { id: id.to_string() })
    }

    /// All definitions in registration order.
    pub fn list(&self) -> &[Arc<SimulationDef>] {
        &self.definitions
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimulationDef> {
        self.definitions.iter().map(|d| d.as_ref())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Distinct categories in first-appearance order.
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for def in &self.definitions {
            if !names.contains(&def.category.as_str()) {
                names.push(&def.category);
            }
        }
        names
    }

    /// Filter choices for a category picker: `All` first, then every category.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                self.category_names()
                    .into_iter()
                    .map(|c| CategoryFilter::Named(c.to_string())),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vl_model::{OutputDef, VariableDef};

    fn def(id: &str, category: &str) -> SimulationDef {
        SimulationDef::builder(id, category, format!("Sim {id}"))
            .variable(VariableDef::new("x", "X", 0.0, 1.0, 0.5))
            .output(OutputDef::new("y", "Y"))
            .compute(|x| [("y", x["x"])].into())
    }

    #[test]
    fn lookup_by_id() {
        let reg = Registry::new(vec![def("a", "One"), def("b", "Two")]).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("b").map(|d| d.category.as_str()), Some("Two"));
        assert!(reg.get("zzz").is_none());
        assert_eq!(
            reg.require("zzz").unwrap_err(),
            EngineError::NotFound { id: "zzz".to_string() }
        );
    }

    #[test]
    fn duplicate_ids_fail_construction() {
        let err = Registry::new(vec![def("a", "One"), def("a", "Two")]).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateId { id: "a".to_string() });
    }

    #[test]
    fn invalid_member_fails_construction() {
        let bad = SimulationDef::builder("bad", "One", "Bad")
            .variable(VariableDef::new("x", "X", 0.0, 1.0, 3.0))
            .compute(|_| vl_model::OutputAssignment::new());
        assert!(Registry::new(vec![def("a", "One"), bad]).is_err());
    }

    #[test]
    fn categories_start_with_all() {
        let reg = Registry::new(vec![def("a", "One"), def("b", "Two"), def("c", "One")]).unwrap();
        assert_eq!(reg.category_names(), vec!["One", "Two"]);
        assert_eq!(
            reg.categories(),
            vec![
                CategoryFilter::All,
                CategoryFilter::Named("One".to_string()),
                CategoryFilter::Named("Two".to_string()),
            ]
        );
    }

    #[test]
    fn empty_registry_is_valid() {
        let reg = Registry::new(Vec::new()).unwrap();
        assert!(reg.is_empty());
        assert_eq!(reg.categories(), vec![CategoryFilter::All]);
    }
}
