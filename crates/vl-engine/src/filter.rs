//! Selection filter: search text plus category over a registry.

use std::fmt;
use std::str::FromStr;

use vl_model::SimulationDef;

use crate::registry::Registry;

/// Category predicate. `All` disables category filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "all";

    /// Exact, case-sensitive comparison for named categories.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == Self::ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s.to_string())
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_LABEL),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub text: String,
    pub category: CategoryFilter,
}

impl Query {
    pub fn new(text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Case-insensitive substring match over name, category and description.
    /// Blank text matches everything.
    pub fn matches_text(&self, def: &SimulationDef) -> bool {
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystack = format!("{}\n{}\n{}", def.name, def.category, def.description).to_lowercase();
        haystack.contains(&needle)
    }

    pub fn matches(&self, def: &SimulationDef) -> bool {
        self.category.matches(&def.category) && self.matches_text(def)
    }
}

/// Definitions matching `query`, in registry order.
pub fn filter<'r>(registry: &'r Registry, query: &Query) -> Vec<&'r SimulationDef> {
    registry.iter().filter(|def| query.matches(def)).collect()
}
