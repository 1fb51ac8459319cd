//! `sim01`..`sim35`: the core mechanics, waves, circuits and modern physics set.

use vl_core::constants::{
    COULOMB, G0_MPS2, GAS_CONSTANT, GRAVITATIONAL_CONSTANT, PLANCK, SPEED_OF_LIGHT,
    STEFAN_BOLTZMANN, deg_to_rad,
};
use vl_core::guard_denominator;
use vl_model::SimulationDef;

use crate::{out, var};

const TAU: f64 = std::f64::consts::TAU;

fn lorentz_factor(v: f64) -> f64 {
    1.0 / (1.0 - (v * v) / (SPEED_OF_LIGHT * SPEED_OF_LIGHT)).sqrt()
}

/// Image distance and magnification from the thin lens / mirror relation.
fn image_of(f: f64, object: f64) -> (f64, f64) {
    let di = f * object / guard_denominator(object - f);
    (di, -di / object)
}

pub(super) fn definitions() -> Vec<SimulationDef> {
    vec![
        SimulationDef::builder("sim01", "Kinematics", "Uniform Acceleration (Displacement)")
            .description("Displacement under constant acceleration: s = v0 t + 1/2 a t^2")
            .formula("s = v0 t + 1/2 a t^2;  vf = v0 + a t")
            .variable(var("v0", "Initial Velocity", -50.0, 50.0, 10.0).step(0.5).unit("m/s"))
            .variable(var("a", "Acceleration", -20.0, 20.0, 2.0).step(0.2).unit("m/s^2"))
            .variable(var("t", "Time", 0.0, 30.0, 5.0).step(0.1).unit("s"))
            .output(out("s", "Displacement").unit("m"))
            .output(out("vf", "Final Velocity").unit("m/s"))
            .compute(|x| {
                let (v0, a, t) = (x["v0"], x["a"], x["t"]);
                [("s", v0 * t + 0.5 * a * t * t), ("vf", v0 + a * t)].into()
            }),
        SimulationDef::builder("sim02", "Kinematics", "Projectile Range (Level Ground)")
            .description("Range of a projectile launched from level ground: R = v^2 sin(2θ)/g")
            .formula("R = v^2 sin(2θ)/g; T = 2 v sinθ / g")
            .variable(var("v", "Velocity", 0.0, 100.0, 25.0).unit("m/s"))
            .variable(var("theta", "Angle", 0.0, 90.0, 45.0).unit("deg"))
            .output(out("R", "Range").unit("m"))
            .output(out("T", "Flight Time").unit("s"))
            .compute(|x| {
                let (v, th) = (x["v"], deg_to_rad(x["theta"]));
                [
                    ("R", v * v * (2.0 * th).sin() / G0_MPS2),
                    ("T", 2.0 * v * th.sin() / G0_MPS2),
                ]
                .into()
            }),
        SimulationDef::builder("sim03", "Energy", "Kinetic Energy")
            .description("KE = 1/2 m v^2")
            .formula("KE = 1/2 m v^2")
            .variable(var("m", "Mass", 0.0, 200.0, 10.0).unit("kg"))
            .variable(var("v", "Velocity", 0.0, 100.0, 15.0).unit("m/s"))
            .output(out("KE", "Kinetic Energy").unit("J"))
            .compute(|x| [("KE", 0.5 * x["m"] * x["v"] * x["v"])].into()),
        SimulationDef::builder("sim04", "Energy", "Gravitational Potential Energy")
            .description("PE = m g h")
            .formula("PE = m g h")
            .variable(var("m", "Mass", 0.0, 500.0, 50.0).unit("kg"))
            .variable(var("h", "Height", 0.0, 100.0, 10.0).unit("m"))
            .output(out("PE", "Potential Energy").unit("J"))
            .compute(|x| [("PE", x["m"] * G0_MPS2 * x["h"])].into()),
        SimulationDef::builder("sim05", "Energy", "Spring Potential Energy")
            .description("Us = 1/2 k x^2")
            .formula("Us = 1/2 k x^2")
            .variable(var("k", "Spring Constant", 1.0, 1000.0, 200.0).unit("N/m"))
            .variable(var("x", "Displacement", 0.0, 2.0, 0.3).step(0.01).unit("m"))
            .output(out("Us", "Elastic Potential").unit("J"))
            .compute(|x| [("Us", 0.5 * x["k"] * x["x"] * x["x"])].into()),
        SimulationDef::builder("sim06", "Oscillations", "Mass-Spring Period")
            .description("T = 2π √(m/k)")
            .formula("T = 2π √(m/k)")
            .variable(var("m", "Mass", 0.1, 50.0, 1.0).step(0.1).unit("kg"))
            .variable(var("k", "Spring Constant", 1.0, 500.0, 50.0).unit("N/m"))
            .output(out("T", "Period").unit("s"))
            .compute(|x| [("T", TAU * (x["m"] / guard_denominator(x["k"])).sqrt())].into()),
        SimulationDef::builder("sim07", "Oscillations", "Simple Pendulum Period")
            .description("Small-angle approximation: T = 2π √(L/g)")
            .formula("T = 2π √(L/g)")
            .variable(var("L", "Length", 0.1, 20.0, 2.0).step(0.1).unit("m"))
            .output(out("T", "Period").unit("s"))
            .compute(|x| [("T", TAU * (x["L"] / G0_MPS2).sqrt())].into()),
        SimulationDef::builder("sim08", "Waves", "Wave Speed")
            .description("v = f λ")
            .formula("v = f λ")
            .variable(var("f", "Frequency", 0.0, 2000.0, 440.0).unit("Hz"))
            .variable(var("lambda", "Wavelength", 0.01, 10.0, 0.78).step(0.01).unit("m"))
            .output(out("v", "Wave Speed").unit("m/s"))
            .compute(|x| [("v", x["f"] * x["lambda"])].into()),
        SimulationDef::builder("sim09", "Waves", "Frequency from Speed & Wavelength")
            .description("f = v / λ")
            .formula("f = v / λ")
            .variable(var("v", "Speed", 0.0, 1000.0, 340.0).unit("m/s"))
            .variable(var("lambda", "Wavelength", 0.01, 10.0, 0.5).step(0.01).unit("m"))
            .output(out("f", "Frequency").unit("Hz"))
            .compute(|x| [("f", x["v"] / guard_denominator(x["lambda"]))].into()),
        SimulationDef::builder("sim10", "Waves", "Doppler Shift (Observer Moving)")
            .description("f' = f (v + vo)/v (source stationary)")
            .formula("f' = f (v + v_o)/v")
            .variable(var("f", "Source Frequency", 0.0, 2000.0, 500.0).unit("Hz"))
            .variable(var("vo", "Observer Velocity", -100.0, 100.0, 10.0).unit("m/s"))
            .variable(var("v", "Wave Speed", 1.0, 1000.0, 340.0).unit("m/s"))
            .output(out("fprime", "Observed Frequency").unit("Hz"))
            .compute(|x| {
                let v = x["v"];
                [("fprime", x["f"] * (v + x["vo"]) / guard_denominator(v))].into()
            }),
        SimulationDef::builder("sim11", "Thermodynamics", "Ideal Gas Law (Pressure)")
            .description("P = n R T / V with R = 8.314 J/(mol·K)")
            .formula("P = n R T / V")
            .variable(var("n", "Moles (n)", 0.1, 10.0, 1.0).step(0.1))
            .variable(var("T", "Temperature", 200.0, 800.0, 300.0).unit("K"))
            .variable(var("V", "Volume", 0.001, 2.0, 0.05).step(0.001).unit("m^3"))
            .output(out("P", "Pressure").unit("Pa"))
            .compute(|x| {
                [("P", x["n"] * GAS_CONSTANT * x["T"] / guard_denominator(x["V"]))].into()
            }),
        SimulationDef::builder("sim12", "Thermodynamics", "Ideal Gas Law (Temperature)")
            .description("Solve for T: T = P V / (n R)")
            .formula("T = P V / (n R)")
            .variable(var("P", "Pressure", 1000.0, 500_000.0, 101_325.0).unit("Pa"))
            .variable(var("n", "Moles (n)", 0.1, 10.0, 1.0).step(0.1))
            .variable(var("V", "Volume", 0.001, 2.0, 0.05).step(0.001).unit("m^3"))
            .output(out("T", "Temperature").unit("K"))
            .compute(|x| {
                [("T", x["P"] * x["V"] / guard_denominator(x["n"] * GAS_CONSTANT))].into()
            }),
        SimulationDef::builder("sim13", "Optics", "Thin Lens Equation")
            .description("1/f = 1/do + 1/di → di = (f do)/(do - f)")
            .formula("1/f = 1/d_o + 1/d_i")
            .variable(var("f", "Focal Length", -100.0, 100.0, 20.0).unit("cm"))
            .variable(var("do", "Object Distance", 1.0, 200.0, 60.0).unit("cm"))
            .output(out("di", "Image Distance").unit("cm"))
            .output(out("m", "Magnification"))
            .compute(|x| {
                let (di, m) = image_of(x["f"], x["do"]);
                [("di", di), ("m", m)].into()
            }),
        SimulationDef::builder("sim14", "Optics", "Mirror Equation")
            .description("1/f = 1/do + 1/di (mirror); identical math to lens")
            .formula("1/f = 1/d_o + 1/d_i")
            .variable(var("f", "Focal Length", -100.0, 100.0, 30.0).unit("cm"))
            .variable(var("do", "Object Distance", 1.0, 200.0, 90.0).unit("cm"))
            .output(out("di", "Image Distance").unit("cm"))
            .output(out("m", "Magnification"))
            .compute(|x| {
                let (di, m) = image_of(x["f"], x["do"]);
                [("di", di), ("m", m)].into()
            }),
        SimulationDef::builder("sim15", "Electricity", "Ohm's Law (Voltage)")
            .description("V = I R")
            .formula("V = I R")
            .variable(var("I", "Current", 0.0, 20.0, 2.0).step(0.1).unit("A"))
            .variable(var("R", "Resistance", 0.1, 1000.0, 120.0).unit("Ω"))
            .output(out("V", "Voltage").unit("V"))
            .compute(|x| [("V", x["I"] * x["R"])].into()),
        SimulationDef::builder("sim16", "Electricity", "Power Dissipation")
            .description("P = I^2 R")
            .formula("P = I^2 R")
            .variable(var("I", "Current", 0.0, 20.0, 2.0).step(0.1).unit("A"))
            .variable(var("R", "Resistance", 0.1, 1000.0, 120.0).unit("Ω"))
            .output(out("P", "Power").unit("W"))
            .compute(|x| [("P", x["I"] * x["I"] * x["R"])].into()),
        SimulationDef::builder("sim17", "Electricity", "RC Circuit Time Constant")
            .description("τ = R C")
            .formula("τ = R C")
            .variable(var("R", "Resistance", 1.0, 1_000_000.0, 1000.0).unit("Ω"))
            .variable(var("C", "Capacitance", 1e-9, 0.1, 0.001).step(0.0001).unit("F"))
            .output(out("tau", "Time Constant τ").unit("s"))
            .compute(|x| [("tau", x["R"] * x["C"])].into()),
        SimulationDef::builder("sim18", "Electricity", "Charging Capacitor Voltage")
            .description("V(t) = V0 (1 - e^{-t/RC})")
            .formula("V(t) = V_0 (1 - e^{-t/RC})")
            .variable(var("V0", "Supply Voltage", 0.0, 24.0, 12.0).unit("V"))
            .variable(var("R", "Resistance", 1.0, 1_000_000.0, 1000.0).unit("Ω"))
            .variable(var("C", "Capacitance", 1e-9, 0.1, 0.001).step(0.0001).unit("F"))
            .variable(var("t", "Time", 0.0, 10.0, 1.0).step(0.01).unit("s"))
            .output(out("Vt", "Voltage (t)").unit("V"))
            .compute(|x| {
                let rc = guard_denominator(x["R"] * x["C"]);
                [("Vt", x["V0"] * (1.0 - (-x["t"] / rc).exp()))].into()
            }),
        SimulationDef::builder("sim19", "Electricity", "Discharging Capacitor Voltage")
            .description("V(t) = V0 e^{-t/RC}")
            .formula("V(t) = V_0 e^{-t/RC}")
            .variable(var("V0", "Initial Voltage", 0.0, 24.0, 12.0).unit("V"))
            .variable(var("R", "Resistance", 1.0, 1_000_000.0, 1000.0).unit("Ω"))
            .variable(var("C", "Capacitance", 1e-9, 0.1, 0.001).step(0.0001).unit("F"))
            .variable(var("t", "Time", 0.0, 10.0, 1.0).step(0.01).unit("s"))
            .output(out("Vt", "Voltage (t)").unit("V"))
            .compute(|x| {
                let rc = guard_denominator(x["R"] * x["C"]);
                [("Vt", x["V0"] * (-x["t"] / rc).exp())].into()
            }),
        SimulationDef::builder("sim20", "Electricity", "Inductor Energy")
            .description("U = 1/2 L I^2")
            .formula("U = 1/2 L I^2")
            .variable(var("L", "Inductance", 1e-6, 10.0, 0.05).step(0.001).unit("H"))
            .variable(var("I", "Current", 0.0, 50.0, 5.0).unit("A"))
            .output(out("U", "Energy").unit("J"))
            .compute(|x| [("U", 0.5 * x["L"] * x["I"] * x["I"])].into()),
        SimulationDef::builder("sim21", "Modern", "Photon Energy")
            .description("E = h f, h = 6.626e-34")
            .formula("E = h f")
            .variable(var("f", "Frequency", 1e12, 1e16, 5e14).step(1e12).unit("Hz"))
            .output(out("E", "Energy").unit("J"))
            .compute(|x| [("E", PLANCK * x["f"])].into()),
        SimulationDef::builder("sim22", "Modern", "de Broglie Wavelength")
            .description("λ = h / (m v)")
            .formula("λ = h / (m v)")
            .variable(var("m", "Mass", 9.1e-31, 1e-24, 9.1e-31).step(1e-31).unit("kg"))
            .variable(var("v", "Velocity", 1e3, 1e7, 1e6).step(1e5).unit("m/s"))
            .output(out("lambda", "Wavelength").unit("m"))
            .compute(|x| [("lambda", PLANCK / guard_denominator(x["m"] * x["v"]))].into()),
        SimulationDef::builder("sim23", "Modern", "Relativistic Factor γ")
            .description("γ = 1 / sqrt(1 - (v/c)^2), c=3e8")
            .formula("γ = 1 / √(1 - (v/c)^2)")
            .variable(var("v", "Velocity", 0.0, 2.9e8, 1e8).step(1e7).unit("m/s"))
            .output(out("gamma", "γ"))
            .compute(|x| [("gamma", lorentz_factor(x["v"]))].into()),
        SimulationDef::builder("sim24", "Modern", "Relativistic Kinetic Energy")
            .description("K = (γ - 1) m c^2")
            .formula("K = (γ - 1) m c^2")
            .variable(var("m", "Mass", 1e-31, 1.0, 0.001).step(0.001).unit("kg"))
            .variable(var("v", "Velocity", 0.0, 2.9e8, 1e8).step(1e7).unit("m/s"))
            .output(out("K", "Kinetic Energy").unit("J"))
            .compute(|x| {
                let gamma = lorentz_factor(x["v"]);
                [("K", (gamma - 1.0) * x["m"] * SPEED_OF_LIGHT * SPEED_OF_LIGHT)].into()
            }),
        SimulationDef::builder("sim25", "Thermodynamics", "Heat Conduction (Rate)")
            .description("Q/t = k A ΔT / L (simplified slab)")
            .formula("Q/t = k A ΔT / L")
            .variable(var("k", "Conductivity", 0.01, 500.0, 50.0).unit("W/mK"))
            .variable(var("A", "Area", 0.001, 10.0, 0.5).step(0.001).unit("m^2"))
            .variable(var("dT", "ΔT", 1.0, 500.0, 40.0).unit("K"))
            .variable(var("L", "Thickness", 0.001, 1.0, 0.05).step(0.001).unit("m"))
            .output(out("rate", "Heat Rate").unit("W"))
            .compute(|x| {
                [("rate", x["k"] * x["A"] * x["dT"] / guard_denominator(x["L"]))].into()
            }),
        SimulationDef::builder("sim26", "Thermodynamics", "Blackbody Power")
            .description("P = σ A T^4, σ=5.67e-8")
            .formula("P = σ A T^4")
            .variable(var("A", "Area", 0.001, 20.0, 1.0).unit("m^2"))
            .variable(var("T", "Temperature", 100.0, 2000.0, 500.0).unit("K"))
            .output(out("P", "Power").unit("W"))
            .compute(|x| [("P", STEFAN_BOLTZMANN * x["A"] * x["T"].powi(4))].into()),
        SimulationDef::builder("sim27", "Thermodynamics", "Carnot Efficiency")
            .description("η = 1 - Tc/Th")
            .formula("η = 1 - T_c/T_h")
            .variable(var("Th", "Hot Temp", 250.0, 1500.0, 600.0).unit("K"))
            .variable(var("Tc", "Cold Temp", 100.0, 500.0, 300.0).unit("K"))
            .output(out("eta", "Efficiency"))
            .compute(|x| [("eta", 1.0 - x["Tc"] / guard_denominator(x["Th"]))].into()),
        SimulationDef::builder("sim28", "Waves", "Standing Wave Frequency (String)")
            .description("f_n = n v / (2 L)")
            .formula("f_n = n v / (2 L)")
            .variable(var("n", "Mode (n)", 1.0, 10.0, 1.0))
            .variable(var("v", "Wave Speed", 10.0, 500.0, 200.0).unit("m/s"))
            .variable(var("L", "Length", 0.1, 10.0, 1.0).step(0.1).unit("m"))
            .output(out("f", "Frequency").unit("Hz"))
            .compute(|x| [("f", x["n"] * x["v"] / guard_denominator(2.0 * x["L"]))].into()),
        SimulationDef::builder("sim29", "Waves", "Beat Frequency")
            .description("f_beat = |f1 - f2|")
            .formula("f_beat = |f_1 - f_2|")
            .variable(var("f1", "Frequency 1", 100.0, 2000.0, 440.0).unit("Hz"))
            .variable(var("f2", "Frequency 2", 100.0, 2000.0, 445.0).unit("Hz"))
            .output(out("fbeat", "Beat Frequency").unit("Hz"))
            .compute(|x| [("fbeat", (x["f1"] - x["f2"]).abs())].into()),
        SimulationDef::builder("sim30", "Waves", "Index of Refraction (Speed)")
            .description("n = c / v, c = 3e8")
            .formula("n = c / v")
            .variable(var("v", "Medium Speed", 1e6, 3e8, 2e8).step(1e6).unit("m/s"))
            .output(out("n", "Index n"))
            .compute(|x| [("n", SPEED_OF_LIGHT / guard_denominator(x["v"]))].into()),
        SimulationDef::builder("sim31", "Gravity", "Escape Velocity")
            .description("v_e = sqrt(2 G M / R); using Earth defaults when unspecified")
            .formula("v_e = √(2 G M / R)")
            .variable(var("M", "Mass of Body", 1e20, 1e26, 5.97e24).step(1e22).unit("kg"))
            .variable(var("R", "Radius", 1e5, 1e8, 6.37e6).step(1e5).unit("m"))
            .output(out("ve", "Escape Velocity").unit("m/s"))
            .compute(|x| {
                let ve = (2.0 * GRAVITATIONAL_CONSTANT * x["M"] / guard_denominator(x["R"])).sqrt();
                [("ve", ve)].into()
            }),
        SimulationDef::builder("sim32", "Fluid Dynamics", "Terminal Velocity (Sphere)")
            .description("v_t = sqrt((2 m g)/(ρ A C_d)), C_d≈0.47 sphere")
            .formula("v_t = √((2 m g)/(ρ A C_d))")
            .variable(var("m", "Mass", 0.001, 50.0, 0.5).step(0.01).unit("kg"))
            .variable(var("rho", "Fluid Density", 0.1, 2000.0, 1.225).step(0.1).unit("kg/m^3"))
            .variable(var("A", "Cross Area", 1e-4, 2.0, 0.02).step(0.0001).unit("m^2"))
            .variable(var("Cd", "Drag Coefficient", 0.1, 2.0, 0.47).step(0.01))
            .output(out("vt", "Terminal Velocity").unit("m/s"))
            .compute(|x| {
                let drag = guard_denominator(x["rho"] * x["A"] * x["Cd"]);
                [("vt", (2.0 * x["m"] * G0_MPS2 / drag).sqrt())].into()
            }),
        SimulationDef::builder("sim33", "Electricity", "Coulomb Force Magnitude")
            .description("F = k |q1 q2| / r^2, k=8.99e9")
            .formula("F = k |q_1 q_2| / r^2")
            .variable(var("q1", "Charge q1", -5e-3, 5e-3, 1e-3).step(1e-4).unit("C"))
            .variable(var("q2", "Charge q2", -5e-3, 5e-3, -1e-3).step(1e-4).unit("C"))
            .variable(var("r", "Separation", 0.001, 10.0, 0.5).step(0.001).unit("m"))
            .output(out("F", "Force").unit("N"))
            .compute(|x| {
                let r = x["r"];
                [("F", COULOMB * (x["q1"] * x["q2"]).abs() / guard_denominator(r * r))].into()
            }),
        SimulationDef::builder("sim34", "Magnetism", "Magnetic Force on Charge")
            .description("F = q v B sin θ")
            .formula("F = q v B sinθ")
            .variable(var("q", "Charge", -5e-3, 5e-3, 2e-3).step(1e-4).unit("C"))
            .variable(var("v", "Velocity", 0.0, 3e7, 1e6).step(1e5).unit("m/s"))
            .variable(var("B", "Magnetic Field", 0.0, 5.0, 0.2).step(0.01).unit("T"))
            .variable(var("theta", "Angle", 0.0, 90.0, 90.0).unit("deg"))
            .output(out("F", "Force").unit("N"))
            .compute(|x| {
                let f = x["q"].abs() * x["v"] * x["B"] * deg_to_rad(x["theta"]).sin();
                [("F", f)].into()
            }),
        SimulationDef::builder("sim35", "Optics", "Lens Maker Approximation")
            .description("Focal length estimate: f ≈ R/(2 (n-1)) (simplified symmetrical lens)")
            .formula("f ≈ R / (2 (n - 1))")
            .variable(var("R", "Radius of Curvature", 0.1, 200.0, 50.0).unit("cm"))
            .variable(var("n", "Index n", 1.0, 2.0, 1.5).step(0.01))
            .output(out("f", "Focal Length").unit("cm"))
            .compute(|x| [("f", x["R"] / guard_denominator(2.0 * (x["n"] - 1.0)))].into()),
    ]
}
