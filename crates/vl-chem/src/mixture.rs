//! Reagents combined in one beaker.

use std::collections::BTreeMap;

use tracing::debug;

use crate::reagent::{NEUTRAL_PH, Reagent};

pub const DEFAULT_VOLUME_ML: f64 = 10.0;

const MIN_PH: f64 = 1.0;
const MAX_PH: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureEntry {
    pub reagent: &'static Reagent,
    pub volume_ml: f64,
}

impl MixtureEntry {
    /// `"Name (10ml)"`, the form sent to the reaction analyser.
    pub fn label(&self) -> String {
        format!("{} ({}ml)", self.reagent.name, self.volume_ml)
    }
}

/// Ordered beaker contents. The same reagent may be added more than once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mixture {
    entries: Vec<MixtureEntry>,
}

impl Mixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `reagent` with the default volume.
    pub fn add(&mut self, reagent: &'static Reagent) -> &mut Self {
        self.add_volume(reagent, DEFAULT_VOLUME_ML)
    }

    pub fn add_volume(&mut self, reagent: &'static Reagent, volume_ml: f64) -> &mut Self {
        debug!(reagent = reagent.name, volume_ml, "reagent added");
        self.entries.push(MixtureEntry { reagent, volume_ml });
        self
    }

    pub fn entries(&self) -> &[MixtureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Rough pH of the beaker.
    ///
    /// Each acid contributes `(7 - pH) * c` and each base `(pH - 7) * c`;
    /// the net excess shifts neutral 7 and the result stays inside 1..=14.
    /// Volumes do not enter the estimate.
    pub fn ph(&self) -> f64 {
        let mut acid = 0.0;
        let mut base = 0.0;
        for entry in &self.entries {
            let ph = entry.reagent.ph();
            let c = entry.reagent.concentration();
            if ph < NEUTRAL_PH {
                acid += (NEUTRAL_PH - ph) * c;
            } else if ph > NEUTRAL_PH {
                base += (ph - NEUTRAL_PH) * c;
            }
        }

        if acid > base {
            (NEUTRAL_PH - (acid - base)).max(MIN_PH)
        } else if base > acid {
            (NEUTRAL_PH + (base - acid)).min(MAX_PH)
        } else {
            NEUTRAL_PH
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(MixtureEntry::label).collect()
    }

    /// Volume per reagent name. A reagent added more than once reports the
    /// volume of its last addition.
    pub fn volumes(&self) -> BTreeMap<String, f64> {
        self.entries
            .iter()
            .map(|e| (e.reagent.name.to_string(), e.volume_ml))
            .collect()
    }

    /// `"Name: 10ml, Other: 5ml"` in beaker order.
    pub fn volume_summary(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}: {}ml", e.reagent.name, e.volume_ml))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Known reactions between any two distinct entries, in beaker order.
    pub fn known_reactions(&self) -> Vec<KnownReaction> {
        let mut found = Vec::new();
        for (i, a) in self.entries.iter().enumerate() {
            for b in &self.entries[i + 1..] {
                if let Some(reaction) = known_reaction(a.reagent, b.reagent)
                    && !found.contains(&reaction)
                {
                    found.push(reaction);
                }
            }
        }
        found
    }
}

/// A canned outcome for a specific reagent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownReaction {
    pub description: &'static str,
    /// Reagent ids of the products.
    pub products: &'static [u32],
}

pub const NO_REACTION: &str = "No visible reaction occurs between these chemicals.";

const KNOWN_REACTIONS: [((u32, u32), KnownReaction); 3] = [
    (
        (3, 4),
        KnownReaction {
            description: "Neutralization of HCl and NaOH produces water and salt.",
            products: &[1, 2],
        },
    ),
    (
        (5, 6),
        KnownReaction {
            description: "Sulfuric acid reacts with ethanol to produce water and glucose (simplified).",
            products: &[1, 7],
        },
    ),
    (
        (8, 9),
        KnownReaction {
            description: "Potassium permanganate reacts with copper sulfate to produce ammonia (example).",
            products: &[10],
        },
    ),
];

/// Look up the canned reaction for a pair, in either order.
pub fn known_reaction(a: &Reagent, b: &Reagent) -> Option<KnownReaction> {
    let pair = if a.id <= b.id { (a.id, b.id) } else { (b.id, a.id) };
    KNOWN_REACTIONS
        .iter()
        .find(|(ids, _)| *ids == pair)
        .map(|(_, reaction)| *reaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reagent::find;

    fn reagent(name: &str) -> &'static Reagent {
        find(name).unwrap()
    }

    #[test]
    fn empty_beaker_is_neutral() {
        assert_eq!(Mixture::new().ph(), NEUTRAL_PH);
    }

    #[test]
    fn acid_and_base_offset() {
        // HCl: pH 3, c 0.3 -> 1.2 acid. NaOH: pH 4, c 0.4 -> 1.2 acid.
        let mut mix = Mixture::new();
        mix.add(reagent("HCl")).add(reagent("NaOH"));
        assert!((mix.ph() - 4.6).abs() < 1e-9);

        // Ammonia: pH 10, c 1.0 -> 3.0 base. Sodium Chloride: pH 2, c 0.2 -> 1.0 acid.
        let mut mix = Mixture::new();
        mix.add(reagent("Ammonia")).add(reagent("NaCl"));
        assert!((mix.ph() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn ph_is_bounded() {
        let mut mix = Mixture::new();
        for _ in 0..20 {
            mix.add(reagent("Water"));
        }
        assert_eq!(mix.ph(), MIN_PH);
    }

    #[test]
    fn duplicates_are_kept_and_last_volume_wins() {
        let mut mix = Mixture::new();
        mix.add(reagent("Water")).add_volume(reagent("Water"), 12.5);
        assert_eq!(mix.len(), 2);
        assert_eq!(mix.labels(), vec!["Water (10ml)", "Water (12.5ml)"]);
        assert_eq!(mix.volumes().get("Water"), Some(&12.5));
        assert_eq!(mix.volumes().len(), 1);
        assert_eq!(mix.volume_summary(), "Water: 10ml, Water: 12.5ml");
    }

    #[test]
    fn known_reaction_ignores_order() {
        let forward = known_reaction(reagent("HCl"), reagent("NaOH"));
        let reverse = known_reaction(reagent("NaOH"), reagent("HCl"));
        assert_eq!(forward, reverse);
        assert_eq!(forward.map(|r| r.products), Some(&[1u32, 2][..]));
        assert!(known_reaction(reagent("Water"), reagent("HCl")).is_none());
    }

    #[test]
    fn mixture_reports_each_reaction_once() {
        let mut mix = Mixture::new();
        mix.add(reagent("HCl"))
            .add(reagent("NaOH"))
            .add(reagent("HCl"))
            .add(reagent("KMnO4"))
            .add(reagent("CuSO4"));
        let found = mix.known_reactions();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].products, &[10]);
    }
}
