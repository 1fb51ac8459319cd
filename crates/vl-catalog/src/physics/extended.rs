//! `sim51`..`sim100`: fluids, gravitation, modern physics, AC circuits,
//! rotation, collisions and heat.

use std::f64::consts::{LN_2, PI, SQRT_2, TAU};

use vl_core::constants::{
    BOLTZMANN, ELECTRON_MASS, ELEMENTARY_CHARGE, G0_MPS2, GAS_CONSTANT, GRAVITATIONAL_CONSTANT,
    HEARING_THRESHOLD, PLANCK, SPEED_OF_LIGHT, STEFAN_BOLTZMANN, VACUUM_PERMEABILITY,
    WIEN_DISPLACEMENT, deg_to_rad,
};
use vl_core::guard_denominator;
use vl_model::SimulationDef;

use crate::{out, var};

/// Below this the flow in a pipe is laminar.
const LAMINAR_REYNOLDS: f64 = 2300.0;
/// Above this the flow in a pipe is turbulent.
const TURBULENT_REYNOLDS: f64 = 4000.0;
/// x in the frequency form of Wien's law, ν_max = x k T / h.
const WIEN_FREQUENCY_FACTOR: f64 = 2.821;

pub(super) fn definitions() -> Vec<SimulationDef> {
    vec![
        SimulationDef::builder("sim51", "Thermodynamics", "Isothermal Gas Work")
            .description("Work done by an ideal gas expanding at constant temperature.")
            .formula("W = n R T ln(V_2 / V_1)")
            .variable(var("n", "Moles (n)", 0.1, 10.0, 1.0).step(0.1))
            .variable(var("T", "Temperature", 100.0, 1000.0, 300.0).unit("K"))
            .variable(var("V1", "Initial Volume", 0.001, 10.0, 0.01).step(0.001).unit("m^3"))
            .variable(var("V2", "Final Volume", 0.001, 10.0, 0.02).step(0.001).unit("m^3"))
            .output(out("W", "Work by Gas").unit("J"))
            .compute(|x| {
                let ratio = x["V2"] / guard_denominator(x["V1"]);
                [("W", x["n"] * GAS_CONSTANT * x["T"] * ratio.ln())].into()
            }),
        SimulationDef::builder("sim52", "Thermodynamics", "Adiabatic Relation")
            .description("Pressure and temperature after a reversible adiabatic change of volume.")
            .formula("P_2 = P_1 (V_1/V_2)^γ;  T_2 = T_1 (V_1/V_2)^(γ-1)")
            .variable(var("P1", "Initial Pressure", 1000.0, 1_000_000.0, 101_325.0).unit("Pa"))
            .variable(var("T1", "Initial Temperature", 100.0, 1000.0, 300.0).unit("K"))
            .variable(var("V1", "Initial Volume", 0.001, 10.0, 1.0).unit("m^3"))
            .variable(var("V2", "Final Volume", 0.001, 10.0, 0.5).unit("m^3"))
            .variable(var("gamma", "Heat Capacity Ratio γ", 1.0, 1.7, 1.4).step(0.01))
            .output(out("P2", "Final Pressure").unit("Pa"))
            .output(out("T2", "Final Temperature").unit("K"))
            .compute(|x| {
                let ratio = x["V1"] / guard_denominator(x["V2"]);
                let gamma = x["gamma"];
                [
                    ("P2", x["P1"] * ratio.powf(gamma)),
                    ("T2", x["T1"] * ratio.powf(gamma - 1.0)),
                ]
                .into()
            }),
        SimulationDef::builder("sim53", "Fluid Dynamics", "Bernoulli Flow Sample")
            .description("Trade-off between fluid speed, height and pressure along a streamline.")
            .formula("P_2 = P_1 + 1/2 ρ (v_1^2 - v_2^2) + ρ g (h_1 - h_2)")
            .variable(var("P1", "Upstream Pressure", 0.0, 1_000_000.0, 200_000.0).unit("Pa"))
            .variable(var("rho", "Density ρ", 1.0, 5000.0, 1000.0).unit("kg/m^3"))
            .variable(var("v1", "Upstream Speed", 0.0, 50.0, 2.0).unit("m/s"))
            .variable(var("v2", "Downstream Speed", 0.0, 50.0, 6.0).unit("m/s"))
            .variable(var("dh", "Height Drop h1 - h2", -50.0, 50.0, 0.0).unit("m"))
            .output(out("P2", "Downstream Pressure").unit("Pa"))
            .compute(|x| {
                let (rho, v1, v2) = (x["rho"], x["v1"], x["v2"]);
                let p2 = x["P1"] + 0.5 * rho * (v1 * v1 - v2 * v2) + rho * G0_MPS2 * x["dh"];
                [("P2", p2)].into()
            }),
        SimulationDef::builder("sim54", "Fluid Dynamics", "Buoyant Force Approx")
            .description("Buoyant force equals the weight of displaced fluid (F_b ≈ ρ V g).")
            .formula("F_b = ρ V g")
            .variable(var("rho", "Fluid Density ρ", 0.0, 5000.0, 1000.0).unit("kg/m^3"))
            .variable(var("V", "Displaced Volume", 0.0, 100.0, 2.0).unit("m^3"))
            .variable(var("g", "Gravity", 1.0, 30.0, 9.81).unit("m/s^2"))
            .output(out("Fb", "Buoyant Force").unit("N"))
            .output(out("massDisplaced", "Displaced Mass").unit("kg"))
            .compute(|x| {
                let mass = x["rho"] * x["V"];
                [("Fb", mass * x["g"]), ("massDisplaced", mass)].into()
            }),
        SimulationDef::builder("sim55", "Fluid Dynamics", "Reynolds Estimate")
            .description("Reynolds number for pipe flow, used to judge laminar vs turbulent tendencies.")
            .formula("Re = ρ v D / μ")
            .variable(var("rho", "Density ρ", 0.1, 5000.0, 1000.0).unit("kg/m^3"))
            .variable(var("v", "Velocity", 0.0, 100.0, 2.0).unit("m/s"))
            .variable(var("D", "Pipe Diameter", 0.001, 10.0, 0.05).unit("m"))
            .variable(var("mu", "Viscosity μ", 1e-5, 10.0, 1e-3).unit("Pa·s"))
            .output(out("Re", "Reynolds Number"))
            .output(out("regime", "Regime (0 laminar, 1 transitional, 2 turbulent)"))
            .compute(|x| {
                let re = x["rho"] * x["v"] * x["D"] / guard_denominator(x["mu"]);
                let regime = if re < LAMINAR_REYNOLDS {
                    0.0
                } else if re <= TURBULENT_REYNOLDS {
                    1.0
                } else {
                    2.0
                };
                [("Re", re), ("regime", regime)].into()
            }),
        SimulationDef::builder("sim56", "Fluid Dynamics", "Poiseuille Flow Rate")
            .description("Laminar volumetric flow through a pipe driven by a pressure drop.")
            .formula("Q = π r^4 ΔP / (8 μ L)")
            .variable(var("r", "Pipe Radius", 1e-4, 0.5, 0.01).unit("m"))
            .variable(var("dP", "Pressure Drop ΔP", 0.0, 100_000.0, 1000.0).unit("Pa"))
            .variable(var("mu", "Viscosity μ", 1e-5, 10.0, 1e-3).unit("Pa·s"))
            .variable(var("L", "Pipe Length", 0.01, 100.0, 1.0).unit("m"))
            .output(out("Q", "Flow Rate").unit("m^3/s"))
            .compute(|x| {
                let q = PI * x["r"].powi(4) * x["dP"] / guard_denominator(8.0 * x["mu"] * x["L"]);
                [("Q", q)].into()
            }),
        SimulationDef::builder("sim57", "Fluid Dynamics", "Surface Tension Drop")
            .description("Laplace pressure inside a spherical drop of radius r.")
            .formula("ΔP = 2 γ / r")
            .variable(var("gamma", "Surface Tension γ", 0.001, 1.0, 0.072).unit("N/m"))
            .variable(var("r", "Drop Radius", 1e-6, 0.01, 1e-3).unit("m"))
            .output(out("dP", "Pressure Difference").unit("Pa"))
            .compute(|x| [("dP", 2.0 * x["gamma"] / guard_denominator(x["r"]))].into()),
        SimulationDef::builder("sim58", "Gravity", "Orbital Period Approx")
            .description("Period of a circular orbit of radius r around a central mass (Kepler's third law).")
            .formula("T = 2π √(r^3 / (G M))")
            .variable(var("M", "Central Mass", 1e20, 1e31, 5.97e24).unit("kg"))
            .variable(var("r", "Orbital Radius", 1e6, 1e12, 4.22e7).unit("m"))
            .output(out("T", "Period").unit("s"))
            .output(out("hours", "Period").unit("h"))
            .compute(|x| {
                let t = TAU * (x["r"].powi(3) / guard_denominator(GRAVITATIONAL_CONSTANT * x["M"])).sqrt();
                [("T", t), ("hours", t / 3600.0)].into()
            }),
        SimulationDef::builder("sim59", "Gravity", "Gravitational Field Strength")
            .description("Field strength at distance r from a mass M (∝ M/r²).")
            .formula("g = G M / r^2")
            .variable(var("M", "Mass", 1e20, 1e31, 5.97e24).unit("kg"))
            .variable(var("r", "Distance", 1e5, 1e12, 6.37e6).unit("m"))
            .output(out("g", "Field Strength").unit("N/kg"))
            .compute(|x| {
                let r = x["r"];
                [("g", GRAVITATIONAL_CONSTANT * x["M"] / guard_denominator(r * r))].into()
            }),
        SimulationDef::builder("sim60", "Gravity", "Gravitational Potential")
            .description("Potential and potential energy of a test mass at distance r, zero at infinity.")
            .formula("V = -G M / r;  U = m V")
            .variable(var("M", "Mass", 1e20, 1e31, 5.97e24).unit("kg"))
            .variable(var("r", "Distance", 1e5, 1e12, 6.37e6).unit("m"))
            .variable(var("m", "Test Mass", 0.0, 1_000_000.0, 1000.0).unit("kg"))
            .output(out("V", "Potential").unit("J/kg"))
            .output(out("U", "Potential Energy").unit("J"))
            .compute(|x| {
                let v = -GRAVITATIONAL_CONSTANT * x["M"] / guard_denominator(x["r"]);
                [("V", v), ("U", x["m"] * v)].into()
            }),
        SimulationDef::builder("sim61", "Modern", "Mass-Energy Equivalence")
            .description("Rest energy of a mass (E = m c²).")
            .formula("E = m c^2")
            .variable(var("m", "Mass", 0.0, 10.0, 0.001).step(0.001).unit("kg"))
            .output(out("E", "Rest Energy").unit("J"))
            .output(out("kWh", "Rest Energy").unit("kWh"))
            .compute(|x| {
                let e = x["m"] * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
                [("E", e), ("kWh", e / 3.6e6)].into()
            }),
        SimulationDef::builder("sim62", "Modern", "Radioactive Decay Count")
            .description("Undecayed nuclei and activity after time t.")
            .formula("N = N_0 e^{-λ t};  λ = ln2 / t_½;  A = λ N")
            .variable(var("N0", "Initial Count N₀", 0.0, 1_000_000.0, 10_000.0))
            .variable(var("t", "Time", 0.0, 100_000.0, 1000.0).unit("s"))
            .variable(var("halfLife", "Half-Life", 1.0, 100_000.0, 5000.0).unit("s"))
            .output(out("N", "Remaining Nuclei"))
            .output(out("A", "Activity").unit("Bq"))
            .compute(|x| {
                let lambda = LN_2 / guard_denominator(x["halfLife"]);
                let n = x["N0"] * (-lambda * x["t"]).exp();
                [("N", n), ("A", lambda * n)].into()
            }),
        SimulationDef::builder("sim63", "Modern", "Half-Life Remaining")
            .description("Fraction and mass of material remaining after a given time.")
            .formula("f = (1/2)^{t / t_½};  m = m_0 f")
            .variable(var("m0", "Initial Mass", 0.0, 1000.0, 100.0).unit("g"))
            .variable(var("t", "Elapsed Time", 0.0, 100_000.0, 10_000.0).unit("y"))
            .variable(var("halfLife", "Half-Life", 1.0, 100_000.0, 5730.0).unit("y"))
            .output(out("fraction", "Fraction Remaining"))
            .output(out("m", "Mass Remaining").unit("g"))
            .compute(|x| {
                let fraction = 0.5_f64.powf(x["t"] / guard_denominator(x["halfLife"]));
                [("fraction", fraction), ("m", x["m0"] * fraction)].into()
            }),
        SimulationDef::builder("sim64", "Modern", "Photoelectric Threshold")
            .description("Electrons are emitted only when the photon frequency exceeds the threshold frequency.")
            .formula("K_max = h (f - f_0) for f > f_0")
            .variable(var("f", "Photon Frequency", 0.0, 3000.0, 500.0).unit("THz"))
            .variable(var("f0", "Threshold Frequency f₀", 0.0, 3000.0, 400.0).unit("THz"))
            .output(out("Kmax", "Max Kinetic Energy").unit("J"))
            .output(out("KmaxEv", "Max Kinetic Energy").unit("eV"))
            .output(out("emitted", "Electrons Emitted (1 = yes)"))
            .compute(|x| {
                let excess = (x["f"] - x["f0"]) * 1e12;
                let k = if excess > 0.0 { PLANCK * excess } else { 0.0 };
                let emitted = if excess > 0.0 { 1.0 } else { 0.0 };
                [("Kmax", k), ("KmaxEv", k / ELEMENTARY_CHARGE), ("emitted", emitted)].into()
            }),
        SimulationDef::builder("sim65", "Modern", "Compton Shift Approx")
            .description("Wavelength shift of an X-ray photon scattered off a free electron.")
            .formula("Δλ = h / (m_e c) (1 - cosθ)")
            .variable(var("lambda", "Incident λ", 1.0, 500.0, 100.0).unit("pm"))
            .variable(var("theta", "Scattering Angle θ", 0.0, 180.0, 45.0).unit("deg"))
            .output(out("dLambda", "Shift Δλ").unit("pm"))
            .output(out("lambdaPrime", "Scattered λ'").unit("pm"))
            .compute(|x| {
                let compton_pm = PLANCK / (ELECTRON_MASS * SPEED_OF_LIGHT) * 1e12;
                let shift = compton_pm * (1.0 - deg_to_rad(x["theta"]).cos());
                [("dLambda", shift), ("lambdaPrime", x["lambda"] + shift)].into()
            }),
        SimulationDef::builder("sim66", "Modern", "Planck Distribution Peak")
            .description("Frequency at which blackbody spectral radiance per unit frequency peaks.")
            .formula("ν_max ≈ 2.821 k T / h")
            .variable(var("T", "Temperature", 100.0, 10_000.0, 5800.0).unit("K"))
            .output(out("nuMax", "Peak Frequency").unit("Hz"))
            .output(out("photonEv", "Photon Energy at Peak").unit("eV"))
            .compute(|x| {
                let nu = WIEN_FREQUENCY_FACTOR * BOLTZMANN * x["T"] / PLANCK;
                [("nuMax", nu), ("photonEv", PLANCK * nu / ELEMENTARY_CHARGE)].into()
            }),
        SimulationDef::builder("sim67", "Modern", "Wien Displacement")
            .description("Surface temperature of a blackbody from its peak emission wavelength.")
            .formula("T = b / λ_max")
            .variable(var("lambdaMax", "Peak Wavelength", 100.0, 10_000.0, 500.0).unit("nm"))
            .output(out("T", "Temperature").unit("K"))
            .compute(|x| {
                [("T", WIEN_DISPLACEMENT / guard_denominator(x["lambdaMax"] * 1e-9))].into()
            }),
        SimulationDef::builder("sim68", "Optics", "Malus Polarization Law")
            .description("Intensity transmitted through a polarizer (I = I₀ cos²θ form).")
            .formula("I = I_0 cos^2 θ")
            .variable(var("I0", "Incident Intensity I₀", 0.0, 1000.0, 500.0).unit("W/m^2"))
            .variable(var("theta", "Analyzer Angle θ", 0.0, 180.0, 60.0).unit("deg"))
            .output(out("I", "Transmitted Intensity").unit("W/m^2"))
            .compute(|x| {
                let c = deg_to_rad(x["theta"]).cos();
                [("I", x["I0"] * c * c)].into()
            }),
        SimulationDef::builder("sim69", "Optics", "Brewster Angle Estimate")
            .description("Incidence angle at which reflected light is fully polarized.")
            .formula("θ_B = atan(n_2 / n_1)")
            .variable(var("n1", "Index n₁", 1.0, 2.5, 1.0))
            .variable(var("n2", "Index n₂", 1.0, 2.5, 1.5))
            .output(out("thetaB", "Brewster Angle").unit("deg"))
            .compute(|x| [("thetaB", x["n2"].atan2(x["n1"]).to_degrees())].into()),
        SimulationDef::builder("sim70", "Optics", "Luminous Intensity Drop")
            .description("Inverse-square reduction in illuminance from a point source.")
            .formula("E = I / d^2")
            .variable(var("I", "Luminous Intensity", 0.0, 10_000.0, 100.0).unit("cd"))
            .variable(var("d", "Distance", 0.1, 100.0, 2.0).unit("m"))
            .output(out("E", "Illuminance").unit("lx"))
            .compute(|x| {
                let d = x["d"];
                [("E", x["I"] / guard_denominator(d * d))].into()
            }),
        SimulationDef::builder("sim71", "Acoustics", "Sound Intensity Level")
            .description("Decibel level of a sound relative to a reference intensity.")
            .formula("β = 10 log10(I / I_0)")
            .variable(var("I", "Intensity", 1e-12, 1.0, 1e-4).unit("W/m^2"))
            .variable(var("I0", "Reference Intensity I₀", 1e-12, 1.0, HEARING_THRESHOLD).unit("W/m^2"))
            .output(out("beta", "Sound Level").unit("dB"))
            .compute(|x| [("beta", 10.0 * (x["I"] / guard_denominator(x["I0"])).log10())].into()),
        SimulationDef::builder("sim72", "Acoustics", "Open Pipe Fundamental")
            .description("Resonant frequencies of a pipe open at both ends (f ≈ v/2L for n = 1).")
            .formula("f_n = n v / (2 L)")
            .variable(var("L", "Pipe Length", 0.1, 20.0, 1.0).unit("m"))
            .variable(var("v", "Speed of Sound", 10.0, 1000.0, 340.0).unit("m/s"))
            .variable(var("n", "Harmonic n", 1.0, 10.0, 1.0).step(1.0))
            .output(out("f", "Frequency").unit("Hz"))
            .output(out("lambda", "Wavelength").unit("m"))
            .compute(|x| {
                let lambda = 2.0 * x["L"] / guard_denominator(x["n"]);
                [("f", x["v"] / guard_denominator(lambda)), ("lambda", lambda)].into()
            }),
        SimulationDef::builder("sim73", "Acoustics", "Closed Pipe Fundamental")
            .description("Resonant frequencies of a pipe closed at one end (f ≈ v/4L); only odd harmonics exist.")
            .formula("f_n = (2n - 1) v / (4 L)")
            .variable(var("L", "Pipe Length", 0.1, 20.0, 1.0).unit("m"))
            .variable(var("v", "Speed of Sound", 10.0, 1000.0, 340.0).unit("m/s"))
            .variable(var("n", "Mode n", 1.0, 10.0, 1.0).step(1.0))
            .output(out("f", "Frequency").unit("Hz"))
            .output(out("harmonic", "Harmonic Number"))
            .compute(|x| {
                let harmonic = 2.0 * x["n"] - 1.0;
                let f = harmonic * x["v"] / guard_denominator(4.0 * x["L"]);
                [("f", f), ("harmonic", harmonic)].into()
            }),
        SimulationDef::builder("sim74", "Waves", "Standing Wave Energy")
            .description("Energy stored in one mode of a vibrating string with antinode amplitude A.")
            .formula("E = 1/4 μ L ω^2 A^2;  ω = 2π f")
            .variable(var("mu", "Linear Density μ", 1e-4, 1.0, 0.01).unit("kg/m"))
            .variable(var("L", "String Length", 0.1, 10.0, 1.0).unit("m"))
            .variable(var("f", "Frequency", 1.0, 2000.0, 100.0).unit("Hz"))
            .variable(var("A", "Antinode Amplitude", 0.0, 0.1, 0.005).unit("m"))
            .output(out("E", "Mode Energy").unit("J"))
            .compute(|x| {
                let omega = TAU * x["f"];
                let a = x["A"];
                [("E", 0.25 * x["mu"] * x["L"] * omega * omega * a * a)].into()
            }),
        SimulationDef::builder("sim75", "Oscillations", "Resonance Gain Factor")
            .description("Amplitude gain of a driven, damped oscillator near its natural frequency.")
            .formula("G = 1 / √((1 - r^2)^2 + (2 ζ r)^2);  r = f / f_0")
            .variable(var("f", "Drive Frequency", 0.0, 1000.0, 95.0).unit("Hz"))
            .variable(var("f0", "Natural Frequency", 1.0, 1000.0, 100.0).unit("Hz"))
            .variable(var("zeta", "Damping Ratio ζ", 0.001, 2.0, 0.05))
            .output(out("gain", "Amplitude Gain"))
            .output(out("phase", "Phase Lag").unit("deg"))
            .compute(|x| {
                let r = x["f"] / guard_denominator(x["f0"]);
                let damping = 2.0 * x["zeta"] * r;
                let stiffness = 1.0 - r * r;
                let gain = 1.0 / guard_denominator(stiffness.hypot(damping));
                [("gain", gain), ("phase", damping.atan2(stiffness).to_degrees())].into()
            }),
        SimulationDef::builder("sim76", "Electricity", "Transformer Turns Ratio")
            .description("Ideal transformer voltage and current ratios (Vs/Vp ≈ Ns/Np).")
            .formula("V_s = V_p N_s / N_p;  I_s = I_p N_p / N_s")
            .variable(var("Np", "Primary Turns", 1.0, 10_000.0, 100.0))
            .variable(var("Ns", "Secondary Turns", 1.0, 10_000.0, 200.0))
            .variable(var("Vp", "Primary Voltage", 0.0, 5000.0, 120.0).unit("V"))
            .variable(var("Ip", "Primary Current", 0.0, 100.0, 2.0).unit("A"))
            .output(out("Vs", "Secondary Voltage").unit("V"))
            .output(out("Is", "Secondary Current").unit("A"))
            .compute(|x| {
                let (np, ns) = (x["Np"], x["Ns"]);
                [
                    ("Vs", x["Vp"] * ns / guard_denominator(np)),
                    ("Is", x["Ip"] * np / guard_denominator(ns)),
                ]
                .into()
            }),
        SimulationDef::builder("sim77", "Electricity", "AC RMS Voltage")
            .description("RMS and peak-to-peak values of a sinusoidal voltage and the mean power into a resistor.")
            .formula("V_rms = V_peak / √2;  P = V_rms^2 / R")
            .variable(var("Vpeak", "Peak Voltage", 0.0, 1000.0, 170.0).unit("V"))
            .variable(var("R", "Load Resistance", 1.0, 10_000.0, 100.0).unit("Ω"))
            .output(out("Vrms", "RMS Voltage").unit("V"))
            .output(out("Vpp", "Peak-to-Peak Voltage").unit("V"))
            .output(out("P", "Mean Power").unit("W"))
            .compute(|x| {
                let vrms = x["Vpeak"] / SQRT_2;
                [
                    ("Vrms", vrms),
                    ("Vpp", 2.0 * x["Vpeak"]),
                    ("P", vrms * vrms / guard_denominator(x["R"])),
                ]
                .into()
            }),
        SimulationDef::builder("sim78", "Electricity", "Inductive Reactance")
            .description("Reactance of an inductor grows with frequency (X_L = 2π f L).")
            .formula("X_L = 2π f L")
            .variable(var("f", "Frequency", 0.0, 100_000.0, 60.0).unit("Hz"))
            .variable(var("L", "Inductance", 0.0, 100.0, 0.5).unit("H"))
            .output(out("XL", "Inductive Reactance").unit("Ω"))
            .compute(|x| [("XL", TAU * x["f"] * x["L"])].into()),
        SimulationDef::builder("sim79", "Electricity", "Capacitive Reactance")
            .description("Reactance of a capacitor falls with frequency (X_C = 1/(2π f C)).")
            .formula("X_C = 1 / (2π f C)")
            .variable(var("f", "Frequency", 0.0, 100_000.0, 60.0).unit("Hz"))
            .variable(var("C", "Capacitance", 0.0, 10_000.0, 10.0).unit("µF"))
            .output(out("XC", "Capacitive Reactance").unit("Ω"))
            .compute(|x| {
                [("XC", 1.0 / guard_denominator(TAU * x["f"] * x["C"] * 1e-6))].into()
            }),
        SimulationDef::builder("sim80", "Electricity", "Impedance Magnitude")
            .description("Series RLC impedance magnitude and phase from resistance and net reactance.")
            .formula("|Z| = √(R^2 + (X_L - X_C)^2);  φ = atan((X_L - X_C) / R)")
            .variable(var("R", "Resistance", 0.0, 10_000.0, 100.0).unit("Ω"))
            .variable(var("XL", "Inductive Reactance", 0.0, 10_000.0, 200.0).unit("Ω"))
            .variable(var("XC", "Capacitive Reactance", 0.0, 10_000.0, 50.0).unit("Ω"))
            .output(out("Z", "Impedance").unit("Ω"))
            .output(out("phi", "Phase Angle").unit("deg"))
            .compute(|x| {
                let (r, net) = (x["R"], x["XL"] - x["XC"]);
                [("Z", r.hypot(net)), ("phi", net.atan2(r).to_degrees())].into()
            }),
        SimulationDef::builder("sim81", "Magnetism", "Magnetic Flux Change")
            .description("Flux through a flat loop before and after the field changes (Φ = B A cosθ).")
            .formula("Φ = B A cosθ;  ΔΦ = (B_2 - B_1) A cosθ")
            .variable(var("A", "Loop Area", 0.0, 100.0, 2.0).unit("m^2"))
            .variable(var("B1", "Initial Field", 0.0, 10.0, 0.5).unit("T"))
            .variable(var("B2", "Final Field", 0.0, 10.0, 1.5).unit("T"))
            .variable(var("theta", "Angle to Normal", 0.0, 90.0, 0.0).unit("deg"))
            .output(out("phi1", "Initial Flux").unit("Wb"))
            .output(out("phi2", "Final Flux").unit("Wb"))
            .output(out("dPhi", "Flux Change").unit("Wb"))
            .compute(|x| {
                let projected = x["A"] * deg_to_rad(x["theta"]).cos();
                let (phi1, phi2) = (x["B1"] * projected, x["B2"] * projected);
                [("phi1", phi1), ("phi2", phi2), ("dPhi", phi2 - phi1)].into()
            }),
        SimulationDef::builder("sim82", "Magnetism", "Faraday Induced EMF")
            .description("EMF induced in a coil by a changing field (|ε| = N dΦ/dt).")
            .formula("|ε| = N A ΔB / Δt")
            .variable(var("N", "Turns", 1.0, 1000.0, 100.0))
            .variable(var("A", "Coil Area", 0.0, 100.0, 2.0).unit("m^2"))
            .variable(var("dB", "Field Change ΔB", 0.0, 10.0, 0.5).unit("T"))
            .variable(var("dt", "Interval Δt", 0.001, 100.0, 1.0).unit("s"))
            .output(out("emf", "Induced EMF").unit("V"))
            .compute(|x| {
                [("emf", x["N"] * x["A"] * x["dB"] / guard_denominator(x["dt"]))].into()
            }),
        SimulationDef::builder("sim83", "Magnetism", "Solenoid Field Strength")
            .description("Field inside a long solenoid (B ≈ μ₀ n I).")
            .formula("B = μ_0 n I")
            .variable(var("n", "Turn Density", 0.0, 5000.0, 100.0).unit("1/m"))
            .variable(var("I", "Current", 0.0, 200.0, 5.0).unit("A"))
            .output(out("B", "Field").unit("T"))
            .compute(|x| [("B", VACUUM_PERMEABILITY * x["n"] * x["I"])].into()),
        SimulationDef::builder("sim84", "Rotation", "Torque from Force")
            .description("Torque from a force applied at a lever arm (τ = r F sinθ).")
            .formula("τ = r F sinθ")
            .variable(var("F", "Force", 0.0, 10_000.0, 50.0).unit("N"))
            .variable(var("r", "Lever Arm", 0.0, 100.0, 2.0).unit("m"))
            .variable(var("theta", "Angle", 0.0, 180.0, 90.0).unit("deg"))
            .output(out("tau", "Torque").unit("N·m"))
            .compute(|x| [("tau", x["r"] * x["F"] * deg_to_rad(x["theta"]).sin())].into()),
        SimulationDef::builder("sim85", "Rotation", "Angular Momentum Approx")
            .description("Angular momentum from moment of inertia and angular speed (L = I ω).")
            .formula("L = I ω")
            .variable(var("I", "Moment of Inertia", 0.0, 10_000.0, 10.0).unit("kg·m^2"))
            .variable(var("omega", "Angular Speed ω", 0.0, 1000.0, 20.0).unit("rad/s"))
            .output(out("L", "Angular Momentum").unit("kg·m^2/s"))
            .compute(|x| [("L", x["I"] * x["omega"])].into()),
        SimulationDef::builder("sim86", "Rotation", "Rotational KE Approx")
            .description("Kinetic energy of a spinning solid disk (K = 1/2 I ω², I = 1/2 m r²).")
            .formula("K = 1/2 I ω^2;  I = 1/2 m r^2")
            .variable(var("m", "Mass", 0.0, 10_000.0, 20.0).unit("kg"))
            .variable(var("r", "Radius", 0.0, 100.0, 2.0).unit("m"))
            .variable(var("omega", "Angular Speed ω", 0.0, 1000.0, 10.0).unit("rad/s"))
            .output(out("I", "Moment of Inertia").unit("kg·m^2"))
            .output(out("K", "Rotational Energy").unit("J"))
            .compute(|x| {
                let (r, omega) = (x["r"], x["omega"]);
                let inertia = 0.5 * x["m"] * r * r;
                [("I", inertia), ("K", 0.5 * inertia * omega * omega)].into()
            }),
        SimulationDef::builder("sim87", "Rotation", "Moment of Inertia Demo")
            .description("Inertia for a shape factor k: 0.4 solid sphere, 0.5 disk, 1 thin hoop.")
            .formula("I = k m r^2")
            .variable(var("m", "Mass", 0.0, 10_000.0, 20.0).unit("kg"))
            .variable(var("r", "Radius", 0.0, 100.0, 2.0).unit("m"))
            .variable(var("k", "Shape Factor k", 0.1, 1.0, 0.5).step(0.05))
            .output(out("I", "Moment of Inertia").unit("kg·m^2"))
            .compute(|x| {
                let r = x["r"];
                [("I", x["k"] * x["m"] * r * r)].into()
            }),
        SimulationDef::builder("sim88", "Kinematics", "Impulse-Momentum")
            .description("Impulse equals the change in momentum (J = Δp).")
            .formula("J = F Δt;  Δv = J / m")
            .variable(var("F", "Force", -10_000.0, 10_000.0, 100.0).unit("N"))
            .variable(var("dt", "Contact Time Δt", 0.0, 10.0, 0.5).unit("s"))
            .variable(var("m", "Mass", 0.01, 10_000.0, 20.0).unit("kg"))
            .output(out("J", "Impulse").unit("N·s"))
            .output(out("dv", "Velocity Change").unit("m/s"))
            .compute(|x| {
                let j = x["F"] * x["dt"];
                [("J", j), ("dv", j / guard_denominator(x["m"]))].into()
            }),
        SimulationDef::builder("sim89", "Kinematics", "Elastic Collision Speed")
            .description("Head-on elastic collision with the second body initially at rest.")
            .formula("v_1' = (m_1 - m_2) v_1 / (m_1 + m_2);  v_2' = 2 m_1 v_1 / (m_1 + m_2)")
            .variable(var("m1", "Mass m1", 0.0, 10_000.0, 20.0).unit("kg"))
            .variable(var("m2", "Mass m2", 0.0, 10_000.0, 40.0).unit("kg"))
            .variable(var("v1", "Velocity v1", -500.0, 500.0, 10.0).unit("m/s"))
            .output(out("v1f", "Final Velocity 1").unit("m/s"))
            .output(out("v2f", "Final Velocity 2").unit("m/s"))
            .compute(|x| {
                let (m1, m2, v1) = (x["m1"], x["m2"], x["v1"]);
                let total = guard_denominator(m1 + m2);
                [("v1f", (m1 - m2) * v1 / total), ("v2f", 2.0 * m1 * v1 / total)].into()
            }),
        SimulationDef::builder("sim90", "Kinematics", "Inelastic Collision Speed")
            .description("Common velocity after two bodies stick together, and the kinetic energy lost.")
            .formula("v_f = (m_1 v_1 + m_2 v_2) / (m_1 + m_2)")
            .variable(var("m1", "Mass m1", 0.0, 10_000.0, 20.0).unit("kg"))
            .variable(var("m2", "Mass m2", 0.0, 10_000.0, 40.0).unit("kg"))
            .variable(var("v1", "Velocity v1", -500.0, 500.0, 10.0).unit("m/s"))
            .variable(var("v2", "Velocity v2", -500.0, 500.0, 0.0).unit("m/s"))
            .output(out("vf", "Final Velocity").unit("m/s"))
            .output(out("keLost", "Kinetic Energy Lost").unit("J"))
            .compute(|x| {
                let (m1, m2, v1, v2) = (x["m1"], x["m2"], x["v1"], x["v2"]);
                let vf = (m1 * v1 + m2 * v2) / guard_denominator(m1 + m2);
                let before = 0.5 * (m1 * v1 * v1 + m2 * v2 * v2);
                let after = 0.5 * (m1 + m2) * vf * vf;
                [("vf", vf), ("keLost", before - after)].into()
            }),
        SimulationDef::builder("sim91", "Energy", "Work-Energy Theorem")
            .description("Work input changes kinetic energy (ΔK = W); the body stops if W removes all of it.")
            .formula("W = F d cosθ;  v_f = √(v_0^2 + 2 W / m)")
            .variable(var("F", "Force", 0.0, 1000.0, 50.0).unit("N"))
            .variable(var("d", "Distance", 0.0, 500.0, 10.0).unit("m"))
            .variable(var("theta", "Angle", 0.0, 180.0, 0.0).unit("deg"))
            .variable(var("m", "Mass", 0.1, 1000.0, 10.0).unit("kg"))
            .variable(var("v0", "Initial Speed", 0.0, 100.0, 0.0).unit("m/s"))
            .output(out("W", "Work").unit("J"))
            .output(out("vf", "Final Speed").unit("m/s"))
            .compute(|x| {
                let w = x["F"] * x["d"] * deg_to_rad(x["theta"]).cos();
                let v0 = x["v0"];
                let vf_sq = v0 * v0 + 2.0 * w / guard_denominator(x["m"]);
                [("W", w), ("vf", vf_sq.max(0.0).sqrt())].into()
            }),
        SimulationDef::builder("sim92", "Energy", "Efficiency Estimator")
            .description("Useful output over input energy for a process.")
            .formula("η = E_out / E_in × 100%")
            .variable(var("Ein", "Energy In", 1.0, 1_000_000.0, 50_000.0).unit("J"))
            .variable(var("Eout", "Useful Energy Out", 0.0, 1_000_000.0, 30_000.0).unit("J"))
            .output(out("eta", "Efficiency").unit("%"))
            .output(out("losses", "Losses").unit("J"))
            .compute(|x| {
                let (ein, eout) = (x["Ein"], x["Eout"]);
                [("eta", 100.0 * eout / guard_denominator(ein)), ("losses", ein - eout)].into()
            }),
        SimulationDef::builder("sim93", "Thermodynamics", "Heat Engine Output")
            .description("Useful work from a heat engine given heat input and heat rejected.")
            .formula("W = Q_h - Q_c;  η = W / Q_h")
            .variable(var("Qh", "Heat In Q_h", 0.0, 1_000_000.0, 50_000.0).unit("J"))
            .variable(var("Qc", "Heat Rejected Q_c", 0.0, 1_000_000.0, 20_000.0).unit("J"))
            .output(out("W", "Work Output").unit("J"))
            .output(out("eta", "Efficiency"))
            .compute(|x| {
                let w = x["Qh"] - x["Qc"];
                [("W", w), ("eta", w / guard_denominator(x["Qh"]))].into()
            }),
        SimulationDef::builder("sim94", "Thermodynamics", "Entropy Change Guess")
            .description("Entropy change for heat exchanged reversibly at constant temperature (ΔS = Q/T).")
            .formula("ΔS = Q / T")
            .variable(var("Q", "Heat Q", -1_000_000.0, 1_000_000.0, 1000.0).unit("J"))
            .variable(var("T", "Temperature", 1.0, 2000.0, 300.0).unit("K"))
            .output(out("dS", "Entropy Change").unit("J/K"))
            .compute(|x| [("dS", x["Q"] / guard_denominator(x["T"]))].into()),
        SimulationDef::builder("sim95", "Thermodynamics", "Specific Heat Estimate")
            .description("Heat required to change a mass's temperature (Q = m c ΔT).")
            .formula("Q = m c ΔT")
            .variable(var("m", "Mass", 0.0, 10_000.0, 10.0).unit("kg"))
            .variable(var("c", "Specific Heat c", 0.0, 100_000.0, 4186.0).unit("J/(kg·K)"))
            .variable(var("dT", "ΔT", -200.0, 500.0, 30.0).unit("K"))
            .output(out("Q", "Heat").unit("J"))
            .compute(|x| [("Q", x["m"] * x["c"] * x["dT"])].into()),
        SimulationDef::builder("sim96", "Thermodynamics", "Latent Heat Transfer")
            .description("Energy absorbed during a phase change (Q = m L).")
            .formula("Q = m L")
            .variable(var("m", "Mass", 0.0, 10_000.0, 2.0).unit("kg"))
            .variable(var("L", "Latent Heat L", 0.0, 10_000_000.0, 334_000.0).unit("J/kg"))
            .output(out("Q", "Heat").unit("J"))
            .compute(|x| [("Q", x["m"] * x["L"])].into()),
        SimulationDef::builder("sim97", "Thermodynamics", "Blackbody Peak λ")
            .description("Peak wavelength shift with temperature (Wien λ_max T ≈ constant) and emitted flux.")
            .formula("λ_max = b / T;  M = σ T^4")
            .variable(var("T", "Temperature", 100.0, 10_000.0, 5800.0).unit("K"))
            .output(out("lambdaMax", "Peak Wavelength").unit("nm"))
            .output(out("M", "Radiant Exitance").unit("W/m^2"))
            .compute(|x| {
                let t = x["T"];
                [
                    ("lambdaMax", WIEN_DISPLACEMENT / guard_denominator(t) * 1e9),
                    ("M", STEFAN_BOLTZMANN * t.powi(4)),
                ]
                .into()
            }),
        SimulationDef::builder("sim98", "Thermodynamics", "Cooling Rate Estimate")
            .description("Newton's law of cooling: exponential approach to the surrounding temperature.")
            .formula("T(t) = T_env + (T_0 - T_env) e^{-k t};  dT/dt = -k (T - T_env)")
            .variable(var("T0", "Initial Temperature", -200.0, 500.0, 90.0).unit("°C"))
            .variable(var("Tenv", "Surroundings", -200.0, 500.0, 25.0).unit("°C"))
            .variable(var("k", "Cooling Constant", 0.0, 10.0, 0.1).unit("1/min"))
            .variable(var("t", "Time", 0.0, 600.0, 10.0).unit("min"))
            .output(out("T", "Temperature").unit("°C"))
            .output(out("rate", "Cooling Rate").unit("°C/min"))
            .compute(|x| {
                let (env, k) = (x["Tenv"], x["k"]);
                let t = env + (x["T0"] - env) * (-k * x["t"]).exp();
                [("T", t), ("rate", -k * (t - env))].into()
            }),
        SimulationDef::builder("sim99", "Optics", "Lens Magnification Demo")
            .description("Magnification relating object and image distances (m = -d_i/d_o).")
            .formula("m = -d_i / d_o;  h_i = m h_o")
            .variable(var("do", "Object Distance", 1.0, 1000.0, 40.0).unit("cm"))
            .variable(var("di", "Image Distance", -1000.0, 1000.0, 80.0).unit("cm"))
            .variable(var("ho", "Object Height", 0.0, 100.0, 5.0).unit("cm"))
            .output(out("m", "Magnification"))
            .output(out("hi", "Image Height").unit("cm"))
            .compute(|x| {
                let m = -x["di"] / guard_denominator(x["do"]);
                [("m", m), ("hi", m * x["ho"])].into()
            }),
        SimulationDef::builder("sim100", "Optics", "Diffraction Angle Approx")
            .description("Angle of the m-th grating maximum (d sinθ = m λ); undefined when m λ > d.")
            .formula("sinθ = m λ / d")
            .variable(var("lambda", "Wavelength λ", 300.0, 800.0, 500.0).unit("nm"))
            .variable(var("d", "Line Spacing d", 0.1, 50.0, 5.0).unit("µm"))
            .variable(var("m", "Order m", 1.0, 10.0, 1.0).step(1.0))
            .output(out("theta", "Diffraction Angle").unit("deg"))
            .compute(|x| {
                let s = x["m"] * x["lambda"] * 1e-9 / guard_denominator(x["d"] * 1e-6);
                let theta = if s.abs() > 1.0 { f64::NAN } else { s.asin().to_degrees() };
                [("theta", theta)].into()
            }),
    ]
}
