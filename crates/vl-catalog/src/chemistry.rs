//! Chemistry lab: parametric solution, acid-base, kinetics and gas calculations.
//!
//! The mixing bench lives in `vl-chem`; these are the formula-driven
//! experiments that run through the same engine as physics and biology.

use std::f64::consts::LN_2;

use vl_core::constants::GAS_CONSTANT;
use vl_core::guard_denominator;
use vl_model::SimulationDef;

use crate::{out, var};

/// Ionic product of water at 25 °C.
const KW: f64 = 1e-14;

pub fn chemistry() -> Vec<SimulationDef> {
    vec![
        SimulationDef::builder("chem01", "Solutions", "Dilution")
            .description("Concentration after diluting a stock solution to a larger volume.")
            .formula("C_1 V_1 = C_2 V_2")
            .variable(var("C1", "Stock Concentration", 0.001, 18.0, 1.0).unit("M"))
            .variable(var("V1", "Stock Volume", 0.1, 1000.0, 10.0).unit("mL"))
            .variable(var("V2", "Final Volume", 1.0, 5000.0, 100.0).unit("mL"))
            .output(out("C2", "Final Concentration").unit("M"))
            .output(out("water", "Solvent Added").unit("mL"))
            .compute(|x| {
                let (v1, v2) = (x["V1"], x["V2"]);
                [("C2", x["C1"] * v1 / guard_denominator(v2)), ("water", v2 - v1)].into()
            }),
        SimulationDef::builder("chem02", "Acids & Bases", "pH of a Strong Acid")
            .description("pH, pOH and hydroxide concentration of a fully dissociated monoprotic acid.")
            .formula("pH = -log10[H+];  pOH = 14 - pH")
            .variable(var("C", "Acid Concentration", 1e-14, 10.0, 0.01).unit("M"))
            .output(out("pH", "pH"))
            .output(out("pOH", "pOH"))
            .output(out("OH", "[OH-]").unit("M"))
            .compute(|x| {
                let h = guard_denominator(x["C"]);
                let ph = -h.log10();
                [("pH", ph), ("pOH", 14.0 - ph), ("OH", KW / h)].into()
            }),
        SimulationDef::builder("chem03", "Acids & Bases", "Henderson-Hasselbalch Buffer")
            .description("pH of a buffer from the acid pKa and the base-to-acid ratio.")
            .formula("pH = pKa + log10([A-] / [HA])")
            .variable(var("pKa", "pKa", 0.0, 14.0, 4.76).step(0.01))
            .variable(var("A", "Conjugate Base [A-]", 0.001, 5.0, 0.1).unit("M"))
            .variable(var("HA", "Weak Acid [HA]", 0.001, 5.0, 0.1).unit("M"))
            .output(out("pH", "Buffer pH"))
            .compute(|x| {
                [("pH", x["pKa"] + (x["A"] / guard_denominator(x["HA"])).log10())].into()
            }),
        SimulationDef::builder("chem04", "Spectroscopy", "Beer-Lambert Absorbance")
            .description("Light absorbed by a solution in a cuvette.")
            .formula("A = ε l c;  T = 10^-A")
            .variable(var("epsilon", "Molar Absorptivity ε", 1.0, 100_000.0, 5000.0).unit("L/(mol·cm)"))
            .variable(var("l", "Path Length", 0.1, 10.0, 1.0).unit("cm"))
            .variable(var("c", "Concentration", 0.0, 0.01, 0.0001).unit("M"))
            .output(out("A", "Absorbance"))
            .output(out("T", "Transmittance").unit("%"))
            .compute(|x| {
                let a = x["epsilon"] * x["l"] * x["c"];
                [("A", a), ("T", 100.0 * 10f64.powf(-a))].into()
            }),
        SimulationDef::builder("chem05", "Kinetics", "Arrhenius Rate Constant")
            .description("Temperature dependence of a rate constant.")
            .formula("k = A e^{-Ea / (R T)}")
            .variable(var("A", "Pre-exponential Factor", 1e3, 1e15, 1e10).unit("1/s"))
            .variable(var("Ea", "Activation Energy", 1.0, 300.0, 50.0).unit("kJ/mol"))
            .variable(var("T", "Temperature", 200.0, 1500.0, 298.0).unit("K"))
            .output(out("k", "Rate Constant").unit("1/s"))
            .compute(|x| {
                let exponent = -x["Ea"] * 1000.0 / guard_denominator(GAS_CONSTANT * x["T"]);
                [("k", x["A"] * exponent.exp())].into()
            }),
        SimulationDef::builder("chem06", "Gases", "Ideal Gas Moles")
            .description("Amount of gas from pressure, volume and temperature.")
            .formula("n = P V / (R T)")
            .variable(var("P", "Pressure", 1.0, 1000.0, 101.325).unit("kPa"))
            .variable(var("V", "Volume", 0.1, 1000.0, 22.4).unit("L"))
            .variable(var("T", "Temperature", 100.0, 1500.0, 273.15).unit("K"))
            .output(out("n", "Amount").unit("mol"))
            // kPa·L is J
            .compute(|x| {
                [("n", x["P"] * x["V"] / guard_denominator(GAS_CONSTANT * x["T"]))].into()
            }),
        SimulationDef::builder("chem07", "Kinetics", "First-Order Decay")
            .description("Reactant remaining in a first-order reaction and its half-life.")
            .formula("[A] = [A]_0 e^{-k t};  t_½ = ln2 / k")
            .variable(var("A0", "Initial [A]", 0.0, 10.0, 1.0).unit("M"))
            .variable(var("k", "Rate Constant", 1e-5, 10.0, 0.01).unit("1/s"))
            .variable(var("t", "Time", 0.0, 10_000.0, 60.0).unit("s"))
            .output(out("A", "Remaining [A]").unit("M"))
            .output(out("halfLife", "Half-Life").unit("s"))
            .compute(|x| {
                let k = x["k"];
                [
                    ("A", x["A0"] * (-k * x["t"]).exp()),
                    ("halfLife", LN_2 / guard_denominator(k)),
                ]
                .into()
            }),
        SimulationDef::builder("chem08", "Solutions", "Molarity")
            .description("Molar concentration of a solute dissolved to a given volume.")
            .formula("n = m / M;  c = n / V")
            .variable(var("mass", "Solute Mass", 0.0, 1000.0, 5.844).unit("g"))
            .variable(var("molarMass", "Molar Mass", 1.0, 1000.0, 58.44).unit("g/mol"))
            .variable(var("V", "Solution Volume", 1.0, 5000.0, 100.0).unit("mL"))
            .output(out("moles", "Amount").unit("mol"))
            .output(out("M", "Molarity").unit("M"))
            .compute(|x| {
                let moles = x["mass"] / guard_denominator(x["molarMass"]);
                [("moles", moles), ("M", moles / guard_denominator(x["V"] / 1000.0))].into()
            }),
    ]
}
