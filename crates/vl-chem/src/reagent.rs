//! Bench reagents.

/// Neutral pH.
pub const NEUTRAL_PH: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reagent {
    pub id: u32,
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

impl Reagent {
    fn index(&self) -> u32 {
        self.id.saturating_sub(1)
    }

    /// Demo pH assigned by bench position, cycling 1..=14.
    pub fn ph(&self) -> f64 {
        1.0 + f64::from(self.index() % 14)
    }

    /// Demo concentration (mol/L) assigned by bench position, cycling 0.1..=1.0.
    pub fn concentration(&self) -> f64 {
        0.1 + f64::from(self.index() % 10) * 0.1
    }

    pub fn is_acid(&self) -> bool {
        self.ph() < NEUTRAL_PH
    }

    pub fn is_base(&self) -> bool {
        self.ph() > NEUTRAL_PH
    }

    /// Case-insensitive substring match on name or formula. Blank matches all.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query) || self.formula.to_lowercase().contains(&query)
    }
}

macro_rules! reagent {
    ($id:expr, $name:expr, $formula:expr, $description:expr) => {
        Reagent {
            id: $id,
            name: $name,
            formula: $formula,
            description: $description,
        }
    };
}

pub const BENCH: [Reagent; 30] = [
    reagent!(1, "Water", "H2O", "Universal solvent."),
    reagent!(2, "Sodium Chloride", "NaCl", "Common salt."),
    reagent!(3, "Hydrochloric Acid", "HCl", "Strong acid used in labs."),
    reagent!(4, "Sodium Hydroxide", "NaOH", "Strong base used in titrations."),
    reagent!(5, "Sulfuric Acid", "H2SO4", "Highly corrosive strong acid."),
    reagent!(6, "Ethanol", "C2H5OH", "Alcohol used as solvent and fuel."),
    reagent!(7, "Glucose", "C6H12O6", "Simple sugar, energy source."),
    reagent!(8, "Potassium Permanganate", "KMnO4", "Oxidizing agent."),
    reagent!(9, "Copper Sulfate", "CuSO4", "Blue crystalline solid used in chemistry."),
    reagent!(10, "Ammonia", "NH3", "Pungent gas, weak base."),
    reagent!(11, "Acetic Acid", "CH3COOH", "Vinegar component, weak acid."),
    reagent!(12, "Calcium Carbonate", "CaCO3", "Limestone, chalk, antacid."),
    reagent!(13, "Magnesium Sulfate", "MgSO4", "Epsom salt, used in baths."),
    reagent!(14, "Sodium Bicarbonate", "NaHCO3", "Baking soda, weak base."),
    reagent!(15, "Nitric Acid", "HNO3", "Strong acid, used in fertilizers."),
    reagent!(16, "Calcium Chloride", "CaCl2", "De-icing agent, drying agent."),
    reagent!(17, "Iron(III) Chloride", "FeCl3", "Used in water treatment."),
    reagent!(18, "Silver Nitrate", "AgNO3", "Used in photography, antiseptic."),
    reagent!(19, "Lead(II) Nitrate", "Pb(NO3)2", "Used in matches, explosives."),
    reagent!(20, "Zinc Sulfate", "ZnSO4", "Dietary supplement, lab reagent."),
    reagent!(21, "Potassium Nitrate", "KNO3", "Fertilizer, food preservative."),
    reagent!(22, "Calcium Sulfate", "CaSO4", "Gypsum, plaster of Paris."),
    reagent!(23, "Sodium Carbonate", "Na2CO3", "Washing soda, water softener."),
    reagent!(24, "Potassium Dichromate", "K2Cr2O7", "Oxidizing agent, cleaning glassware."),
    reagent!(25, "Barium Chloride", "BaCl2", "Used in lab tests for sulfate ions."),
    reagent!(26, "Sodium Sulfate", "Na2SO4", "Used in detergents, paper making."),
    reagent!(27, "Potassium Iodide", "KI", "Iodine supplement, photographic chemical."),
    reagent!(28, "Magnesium Chloride", "MgCl2", "Used in medicine, food industry."),
    reagent!(29, "Aluminum Sulfate", "Al2(SO4)3", "Water purification, paper manufacturing."),
    reagent!(30, "Sodium Nitrate", "NaNO3", "Fertilizer, food preservative."),
];

/// Reagents matching `query`, in bench order.
pub fn search(query: &str) -> Vec<&'static Reagent> {
    BENCH.iter().filter(|r| r.matches_query(query)).collect()
}

/// Exact lookup by name or formula, ignoring case and surrounding space.
pub fn find(name_or_formula: &str) -> Option<&'static Reagent> {
    let needle = name_or_formula.trim();
    BENCH
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(needle) || r.formula.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_values_follow_position() {
        let water = find("water").unwrap();
        assert_eq!(water.ph(), 1.0);
        assert!((water.concentration() - 0.1).abs() < 1e-12);

        let hcl = find("HCl").unwrap();
        assert_eq!(hcl.id, 3);
        assert_eq!(hcl.ph(), 3.0);
        assert!((hcl.concentration() - 0.3).abs() < 1e-12);

        // position 14 wraps the pH cycle back to 1
        let nitric = find("Nitric Acid").unwrap();
        assert_eq!(nitric.ph(), 1.0);
        assert!((nitric.concentration() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn search_by_name_or_formula() {
        let sulfates: Vec<u32> = search("so4").iter().map(|r| r.id).collect();
        assert_eq!(sulfates, vec![5, 9, 13, 20, 22, 26, 29]);
        assert_eq!(search("  ").len(), BENCH.len());
        assert!(search("chloride").iter().all(|r| r.name.contains("Chloride")));
        assert!(search("unobtainium").is_empty());
    }

    #[test]
    fn ids_are_sequential() {
        for (i, r) in BENCH.iter().enumerate() {
            assert_eq!(r.id as usize, i + 1);
        }
    }
}
