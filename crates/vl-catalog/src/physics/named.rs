//! `sim36`..`sim50`.

use vl_core::constants::{COULOMB, ELEMENTARY_CHARGE, deg_to_rad};
use vl_core::guard_denominator;
use vl_model::SimulationDef;

use crate::{out, var};

const TAU: f64 = std::f64::consts::TAU;

/// Refraction angle in degrees, NaN past total internal reflection.
fn refraction_angle_deg(n1: f64, n2: f64, incidence_deg: f64) -> f64 {
    let s = n1 / guard_denominator(n2) * deg_to_rad(incidence_deg).sin();
    if s.abs() > 1.0 {
        f64::NAN
    } else {
        s.asin().to_degrees()
    }
}

pub(super) fn definitions() -> Vec<SimulationDef> {
    vec![
        SimulationDef::builder("sim36", "Kinematics", "Centripetal Force")
            .description("Net inward force keeping a mass on a circular path: F = m v^2 / r.")
            .formula("F = m v^2 / r;  a_c = v^2 / r")
            .variable(var("m", "Mass", 0.0, 200.0, 5.0).unit("kg"))
            .variable(var("v", "Speed", 0.0, 100.0, 20.0).unit("m/s"))
            .variable(var("r", "Radius", 1.0, 100.0, 10.0).unit("m"))
            .output(out("F", "Centripetal Force").unit("N"))
            .output(out("ac", "Centripetal Acceleration").unit("m/s^2"))
            .compute(|x| {
                let ac = x["v"] * x["v"] / guard_denominator(x["r"]);
                [("F", x["m"] * ac), ("ac", ac)].into()
            }),
        SimulationDef::builder("sim37", "Kinematics", "Relative Velocity (1D)")
            .description("Velocity of body 1 as seen from body 2 moving along the same line.")
            .formula("v_rel = v_1 - v_2")
            .variable(var("v1", "Velocity 1", -200.0, 200.0, 50.0).unit("m/s"))
            .variable(var("v2", "Velocity 2", -200.0, 200.0, 10.0).unit("m/s"))
            .output(out("vrel", "Relative Velocity").unit("m/s"))
            .output(out("speed", "Relative Speed").unit("m/s"))
            .compute(|x| {
                let vrel = x["v1"] - x["v2"];
                [("vrel", vrel), ("speed", vrel.abs())].into()
            }),
        SimulationDef::builder("sim38", "Energy", "Work From Force & Distance")
            .description("Work done by a constant force acting at an angle to the displacement.")
            .formula("W = F d cosθ")
            .variable(var("F", "Force", 0.0, 1000.0, 40.0).unit("N"))
            .variable(var("d", "Distance", 0.0, 500.0, 10.0).unit("m"))
            .variable(var("theta", "Angle", 0.0, 180.0, 0.0).unit("deg"))
            .output(out("W", "Work").unit("J"))
            .compute(|x| [("W", x["F"] * x["d"] * deg_to_rad(x["theta"]).cos())].into()),
        SimulationDef::builder("sim39", "Energy", "Mechanical Power Approximation")
            .description("Average power delivered by a force moving a load over a time interval.")
            .formula("P = F d / t")
            .variable(var("F", "Force", 0.0, 1000.0, 60.0).unit("N"))
            .variable(var("d", "Distance", 0.0, 500.0, 20.0).unit("m"))
            .variable(var("t", "Time", 1.0, 300.0, 10.0).unit("s"))
            .output(out("P", "Power").unit("W"))
            .compute(|x| [("P", x["F"] * x["d"] / guard_denominator(x["t"]))].into()),
        SimulationDef::builder("sim40", "Oscillations", "Angular Frequency Guess")
            .description("Natural angular frequency of a mass on a spring.")
            .formula("ω = √(k/m);  f = ω / 2π")
            .variable(var("k", "Spring Constant", 0.1, 1000.0, 100.0).unit("N/m"))
            .variable(var("m", "Mass", 0.1, 100.0, 2.0).unit("kg"))
            .output(out("omega", "Angular Frequency ω").unit("rad/s"))
            .output(out("f", "Frequency").unit("Hz"))
            .compute(|x| {
                let omega = (x["k"] / guard_denominator(x["m"])).sqrt();
                [("omega", omega), ("f", omega / TAU)].into()
            }),
        SimulationDef::builder("sim41", "Oscillations", "Pendulum Small-Angle Frequency")
            .description("Oscillation frequency of a simple pendulum for small swings.")
            .formula("f = (1/2π) √(g/L)")
            .variable(var("L", "Length", 0.1, 20.0, 2.0).unit("m"))
            .variable(var("g", "Gravity", 1.0, 30.0, 9.81).unit("m/s^2"))
            .output(out("f", "Frequency").unit("Hz"))
            .output(out("omega", "Angular Frequency ω").unit("rad/s"))
            .compute(|x| {
                let omega = (x["g"] / guard_denominator(x["L"])).sqrt();
                [("f", omega / TAU), ("omega", omega)].into()
            }),
        SimulationDef::builder("sim42", "Waves", "Basic Interference Intensity")
            .description("Intensity where two coherent waves overlap with a phase difference φ.")
            .formula("I = I_1 + I_2 + 2 √(I_1 I_2) cosφ")
            .variable(var("I1", "Intensity 1", 0.0, 100.0, 20.0).unit("W/m^2"))
            .variable(var("I2", "Intensity 2", 0.0, 100.0, 15.0).unit("W/m^2"))
            .variable(var("phi", "Phase Difference φ", 0.0, 180.0, 60.0).unit("deg"))
            .output(out("I", "Combined Intensity").unit("W/m^2"))
            .compute(|x| {
                let (i1, i2) = (x["I1"], x["I2"]);
                let i = i1 + i2 + 2.0 * (i1 * i2).sqrt() * deg_to_rad(x["phi"]).cos();
                [("I", i)].into()
            }),
        SimulationDef::builder("sim43", "Waves", "Snell Refraction Ratio")
            .description("Refraction angle from n1 sinθ1 = n2 sinθ2; undefined past total internal reflection.")
            .formula("θ_2 = asin(n_1 sinθ_1 / n_2)")
            .variable(var("n1", "Index n1", 1.0, 2.5, 1.0))
            .variable(var("n2", "Index n2", 1.0, 2.5, 1.5))
            .variable(var("theta1", "Incidence θ1", 0.0, 89.0, 30.0).unit("deg"))
            .output(out("theta2", "Refraction θ2").unit("deg"))
            .output(out("tir", "Total Internal Reflection (1 = yes)"))
            .compute(|x| {
                let theta2 = refraction_angle_deg(x["n1"], x["n2"], x["theta1"]);
                let tir = if theta2.is_nan() { 1.0 } else { 0.0 };
                [("theta2", theta2), ("tir", tir)].into()
            }),
        SimulationDef::builder("sim44", "Optics", "Critical Angle")
            .description("Smallest incidence angle giving total internal reflection; exists only when n1 > n2.")
            .formula("θ_c = asin(n_2 / n_1)")
            .variable(var("n1", "Index n1", 1.0, 2.5, 1.5))
            .variable(var("n2", "Index n2", 1.0, 2.5, 1.33))
            .output(out("thetaC", "Critical Angle").unit("deg"))
            .compute(|x| {
                let (n1, n2) = (x["n1"], x["n2"]);
                let theta_c = if n1 > n2 {
                    (n2 / n1).asin().to_degrees()
                } else {
                    f64::NAN
                };
                [("thetaC", theta_c)].into()
            }),
        SimulationDef::builder("sim45", "Optics", "Double-Slit Fringe Spacing")
            .description("Position of the m-th bright fringe on a distant screen.")
            .formula("y = m λ L / d")
            .variable(var("lambda", "Wavelength λ", 300.0, 800.0, 500.0).unit("nm"))
            .variable(var("L", "Screen Distance", 0.1, 10.0, 2.0).unit("m"))
            .variable(var("d", "Slit Separation", 0.1, 5.0, 0.5).unit("mm"))
            .variable(var("m", "Order m", 1.0, 10.0, 1.0).step(1.0))
            .output(out("y", "Fringe Position").unit("m"))
            .compute(|x| {
                let y = x["m"] * x["lambda"] * 1e-9 * x["L"] / guard_denominator(x["d"] * 1e-3);
                [("y", y)].into()
            }),
        SimulationDef::builder("sim46", "Electricity", "Series Resistor Total")
            .description("Equivalent resistance of three resistors in series.")
            .formula("R_total = R_1 + R_2 + R_3")
            .variable(var("R1", "R1", 0.0, 10_000.0, 100.0).unit("Ω"))
            .variable(var("R2", "R2", 0.0, 10_000.0, 220.0).unit("Ω"))
            .variable(var("R3", "R3", 0.0, 10_000.0, 330.0).unit("Ω"))
            .output(out("Rtotal", "Total Resistance").unit("Ω"))
            .compute(|x| [("Rtotal", x["R1"] + x["R2"] + x["R3"])].into()),
        SimulationDef::builder("sim47", "Electricity", "Parallel Resistor Equivalent")
            .description("Equivalent resistance of three resistors in parallel.")
            .formula("1/R = 1/R_1 + 1/R_2 + 1/R_3")
            .variable(var("R1", "R1", 1.0, 10_000.0, 100.0).unit("Ω"))
            .variable(var("R2", "R2", 1.0, 10_000.0, 220.0).unit("Ω"))
            .variable(var("R3", "R3", 1.0, 10_000.0, 330.0).unit("Ω"))
            .output(out("Req", "Equivalent Resistance").unit("Ω"))
            .compute(|x| {
                let conductance = 1.0 / guard_denominator(x["R1"])
                    + 1.0 / guard_denominator(x["R2"])
                    + 1.0 / guard_denominator(x["R3"]);
                [("Req", 1.0 / guard_denominator(conductance))].into()
            }),
        SimulationDef::builder("sim48", "Electricity", "Charge From Current & Time")
            .description("Charge moved by a steady current, and the electron count it represents.")
            .formula("Q = I t;  N = Q / e")
            .variable(var("I", "Current", 0.0, 50.0, 2.0).unit("A"))
            .variable(var("t", "Time", 0.0, 10_000.0, 60.0).unit("s"))
            .output(out("Q", "Charge").unit("C"))
            .output(out("electrons", "Electrons Transferred"))
            .compute(|x| {
                let q = x["I"] * x["t"];
                [("Q", q), ("electrons", q / ELEMENTARY_CHARGE)].into()
            }),
        SimulationDef::builder("sim49", "Electricity", "Electric Field of Point Charge")
            .description("Field strength and potential at distance r from a point charge.")
            .formula("E = k |q| / r^2;  V = k q / r")
            .variable(var("q", "Charge", -100.0, 100.0, 10.0).unit("µC"))
            .variable(var("r", "Distance", 0.01, 50.0, 1.0).unit("m"))
            .output(out("E", "Field Strength").unit("N/C"))
            .output(out("V", "Potential").unit("V"))
            .compute(|x| {
                let (q, r) = (x["q"] * 1e-6, guard_denominator(x["r"]));
                [("E", COULOMB * q.abs() / (r * r)), ("V", COULOMB * q / r)].into()
            }),
        SimulationDef::builder("sim50", "Thermodynamics", "Linear Thermal Expansion")
            .description("Change in length of a rod heated by ΔT.")
            .formula("ΔL = α L ΔT")
            .variable(var("alpha", "Expansion Coefficient α", 1.0, 50.0, 12.0).unit("µ/°C"))
            .variable(var("L", "Length", 0.0, 100.0, 2.0).unit("m"))
            .variable(var("dT", "ΔT", -200.0, 500.0, 40.0).unit("°C"))
            .output(out("dL", "ΔL").unit("m"))
            .output(out("Lf", "Final Length").unit("m"))
            .compute(|x| {
                let dl = x["alpha"] * 1e-6 * x["L"] * x["dT"];
                [("dL", dl), ("Lf", x["L"] + dl)].into()
            }),
    ]
}
