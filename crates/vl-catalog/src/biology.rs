//! Biology lab: `bio01` through `bio14`.

use vl_core::guard_denominator;
use vl_model::SimulationDef;

use crate::{out, var};

/// Approximate ATP per glucose for full aerobic respiration.
const ATP_PER_GLUCOSE: f64 = 30.0;
const POPULATION_CAP: f64 = 1e9;
const OXYGEN_PER_EFFICIENCY: f64 = 20.0;
const GLUCOSE_PER_EFFICIENCY: f64 = 15.0;

/// Relative activity on a Gaussian curve around an optimum.
fn bell(value: f64, optimum: f64, width: f64) -> f64 {
    let d = value - optimum;
    (-(d * d) / (2.0 * width * width)).exp()
}

/// Chromosomes held by one cell at a mitosis stage (1 prophase .. 5 cytokinesis).
///
/// Sister chromatids count as separate chromosomes once they part in
/// anaphase, so the single cell holds twice the diploid number until
/// cytokinesis splits it.
fn chromosomes_per_cell(diploid: f64, stage: f64) -> f64 {
    match stage.round() as i64 {
        3 | 4 => 2.0 * diploid,
        _ => diploid,
    }
}

/// Fraction of peak output for light and CO₂ given in percent of saturation.
fn photosynthesis_efficiency(light_pct: f64, co2_pct: f64) -> f64 {
    (light_pct / 100.0) * (co2_pct / 100.0)
}

pub fn biology() -> Vec<SimulationDef> {
    vec![
        SimulationDef::builder("bio01", "Enzyme", "Michaelis-Menten Enzyme Kinetics")
            .description(
                "Models the rate of an enzyme-catalyzed reaction depending on substrate \
                 concentration, maximum velocity (Vmax) and Michaelis constant (Km).",
            )
            .formula("v = (Vmax * [S]) / (Km + [S])")
            .variable(var("S", "Substrate [S]", 0.0, 50.0, 10.0).unit("mM").step(1.0))
            .variable(var("Vmax", "Vmax", 0.1, 100.0, 50.0).unit("µM/s").step(0.5))
            .variable(var("Km", "Km", 0.1, 30.0, 5.0).unit("mM").step(0.1))
            .output(out("v", "Reaction Rate v").unit("µM/s"))
            .compute(|x| {
                let s = x["S"];
                [("v", x["Vmax"] * s / guard_denominator(x["Km"] + s))].into()
            }),
        SimulationDef::builder("bio02", "Enzyme", "Enzyme Temperature Effect")
            .description(
                "Shows how enzyme activity changes with temperature around an optimum using \
                 a Gaussian (bell-shaped) approximation.",
            )
            .formula("Activity = exp(- (T - Topt)^2 / (2 * σ^2))")
            .variable(var("T", "Temperature", 0.0, 100.0, 37.0).unit("°C").step(1.0))
            .variable(var("Topt", "Optimum Temp", 10.0, 80.0, 40.0).unit("°C").step(1.0))
            .variable(var("sigma", "Width σ", 2.0, 30.0, 10.0).unit("°C").step(1.0))
            .output(out("activity", "Relative Activity"))
            .compute(|x| [("activity", bell(x["T"], x["Topt"], x["sigma"]))].into()),
        SimulationDef::builder("bio03", "Enzyme", "Enzyme pH Activity")
            .description("Bell-shaped response of enzyme activity to pH centered at an optimum pH.")
            .formula("Activity = exp(- (pH - pHopt)^2 / (2 * width^2))")
            .variable(var("pH", "pH", 0.0, 14.0, 7.0).step(0.1))
            .variable(var("pHopt", "Optimum pH", 1.0, 13.0, 7.0).step(0.1))
            .variable(var("width", "Width", 0.2, 5.0, 1.5).step(0.1))
            .output(out("activity", "Relative Activity"))
            .compute(|x| [("activity", bell(x["pH"], x["pHopt"], x["width"]))].into()),
        SimulationDef::builder("bio04", "Population", "Logistic Population Growth")
            .description("Growth of a population with intrinsic rate r limited by carrying capacity K.")
            .formula("dN/dt = r N (1 - N/K)")
            .variable(var("N", "Current Population N", 0.0, 1000.0, 200.0).step(10.0))
            .variable(var("r", "Growth Rate r", 0.0, 2.0, 0.5).step(0.01))
            .variable(var("K", "Carrying Capacity K", 50.0, 2000.0, 800.0).step(10.0))
            .output(out("dNdt", "Growth Rate dN/dt").unit("indiv/time"))
            .output(out("nextN", "Projected N (Δt=1)").unit("indiv"))
            .compute(|x| {
                let n = x["N"];
                let dndt = x["r"] * n * (1.0 - n / guard_denominator(x["K"]));
                [("dNdt", dndt), ("nextN", (n + dndt).clamp(0.0, POPULATION_CAP))].into()
            }),
        SimulationDef::builder("bio05", "Ecology", "Predator-Prey (Lotka-Volterra)")
            .description("Classic coupled equations for prey and predator population interaction.")
            .formula("dPrey/dt = a Prey - b Prey Pred; dPred/dt = c Prey Pred - d Pred")
            .variable(var("prey", "Prey Population", 0.0, 500.0, 200.0).step(5.0))
            .variable(var("pred", "Predator Population", 0.0, 200.0, 50.0).step(1.0))
            .variable(var("a", "Prey Growth a", 0.0, 2.0, 1.0).step(0.01))
            .variable(var("b", "Predation b", 0.0, 0.05, 0.02).step(0.001))
            .variable(var("c", "Efficiency c", 0.0, 0.1, 0.01).step(0.001))
            .variable(var("d", "Predator Death d", 0.0, 2.0, 0.5).step(0.01))
            .output(out("dPrey", "dPrey/dt").unit("prey/time"))
            .output(out("dPred", "dPred/dt").unit("pred/time"))
            .compute(|x| {
                let (prey, pred) = (x["prey"], x["pred"]);
                [
                    ("dPrey", x["a"] * prey - x["b"] * prey * pred),
                    ("dPred", x["c"] * prey * pred - x["d"] * pred),
                ]
                .into()
            }),
        SimulationDef::builder("bio06", "Epidemiology", "SIR Infectious Disease Model")
            .description(
                "Tracks susceptible (S), infected (I), and recovered (R) populations with \
                 transmission rate β and recovery rate γ.",
            )
            .formula("dS/dt = -β S I / N; dI/dt = β S I / N - γ I; dR/dt = γ I; R0 = β / γ")
            .variable(var("S", "Susceptible S", 0.0, 10_000.0, 9000.0).step(50.0))
            .variable(var("I", "Infected I", 0.0, 5000.0, 100.0).step(10.0))
            .variable(var("R", "Recovered R", 0.0, 5000.0, 0.0).step(10.0))
            .variable(var("beta", "Transmission β", 0.0, 2.0, 0.5).step(0.01))
            .variable(var("gamma", "Recovery γ", 0.01, 1.0, 0.2).step(0.01))
            .output(out("dSdt", "dS/dt").unit("people/time"))
            .output(out("dIdt", "dI/dt").unit("people/time"))
            .output(out("dRdt", "dR/dt").unit("people/time"))
            .output(out("R0", "Basic Reproduction R0"))
            .compute(|x| {
                let (s, i, beta, gamma) = (x["S"], x["I"], x["beta"], x["gamma"]);
                let n = guard_denominator(s + i + x["R"]);
                let infections = beta * s * i / n;
                let recoveries = gamma * i;
                [
                    ("dSdt", -infections),
                    ("dIdt", infections - recoveries),
                    ("dRdt", recoveries),
                    ("R0", beta / guard_denominator(gamma)),
                ]
                .into()
            }),
        SimulationDef::builder("bio07", "Genetics", "Hardy-Weinberg Equilibrium")
            .description(
                "Genotype frequencies in a large randomly mating population with allele \
                 frequency p (q = 1 - p).",
            )
            .formula("p^2 + 2pq + q^2 = 1")
            .variable(var("p", "Allele Frequency p", 0.0, 1.0, 0.6).step(0.01))
            .output(out("p2", "Genotype p^2"))
            .output(out("twoPQ", "Genotype 2pq"))
            .output(out("q2", "Genotype q^2"))
            .compute(|x| {
                let p = x["p"];
                let q = 1.0 - p;
                [("p2", p * p), ("twoPQ", 2.0 * p * q), ("q2", q * q)].into()
            }),
        SimulationDef::builder("bio08", "Cellular", "Diffusion Rate (Fick's Law)")
            .description(
                "Solute diffusion across a membrane depends on diffusion coefficient, area, \
                 concentration gradient, and thickness.",
            )
            .formula("Rate = (D * A * ΔC) / d")
            .variable(var("D", "Diffusion Coeff D", 0.0001, 1.0, 0.1).unit("cm^2/s").step(0.0001))
            .variable(var("A", "Area A", 0.1, 100.0, 10.0).unit("cm^2").step(0.1))
            .variable(var("dC", "Concentration ΔC", 0.0, 500.0, 50.0).unit("mM").step(1.0))
            .variable(var("thickness", "Thickness d", 1.0, 100.0, 10.0).unit("µm").step(1.0))
            .output(out("rate", "Diffusion Rate").unit("units/s"))
            .compute(|x| {
                let rate = x["D"] * x["A"] * x["dC"] / guard_denominator(x["thickness"]);
                [("rate", rate)].into()
            }),
        SimulationDef::builder("bio09", "Cellular", "Osmosis Potential Difference")
            .description(
                "Simplified osmotic potential difference based on solute concentrations inside \
                 and outside.",
            )
            .formula("ΔΨ ≈ C_out - C_in (simplified)")
            .variable(var("Cin", "Inside Solute", 0.0, 500.0, 200.0).unit("mM").step(5.0))
            .variable(var("Cout", "Outside Solute", 0.0, 500.0, 150.0).unit("mM").step(5.0))
            .output(out("deltaPsi", "Potential Difference ΔΨ").unit("rel"))
            .output(out("direction", "Water Movement (sign)"))
            .compute(|x| {
                let delta = x["Cout"] - x["Cin"];
                // +1 water leaves the cell, -1 water enters
                let direction = if delta > 0.0 {
                    1.0
                } else if delta < 0.0 {
                    -1.0
                } else {
                    0.0
                };
                [("deltaPsi", delta), ("direction", direction)].into()
            }),
        SimulationDef::builder("bio10", "Cellular", "Cellular Respiration ATP Yield")
            .description(
                "Approximate ATP yield from aerobic respiration based on glucose molecules and \
                 efficiency factor.",
            )
            .formula("ATP ≈ 30 * glucose * efficiency")
            .variable(var("glucose", "Glucose Molecules", 0.0, 1000.0, 10.0).step(1.0))
            .variable(var("eff", "Efficiency", 0.1, 1.0, 0.9).step(0.01))
            .output(out("ATP", "ATP Yield").unit("molecules"))
            .compute(|x| [("ATP", ATP_PER_GLUCOSE * x["glucose"] * x["eff"])].into()),
        SimulationDef::builder("bio11", "Physiology", "Photosynthetic Light Response")
            .description("Photosynthetic rate rises with light and saturates at high intensity.")
            .formula("P = (Pmax * I) / (Ik + I)")
            .variable(var("I", "Light Intensity I", 0.0, 2000.0, 500.0).unit("µmol·m⁻²·s⁻¹").step(10.0))
            .variable(var("Pmax", "Max Rate Pmax", 10.0, 100.0, 60.0).unit("µmol CO₂").step(1.0))
            .variable(var("Ik", "Half-sat Ik", 10.0, 1000.0, 300.0).unit("µmol·m⁻²·s⁻¹").step(10.0))
            .output(out("P", "Photosynthesis Rate P").unit("µmol CO₂"))
            .compute(|x| {
                let i = x["I"];
                [("P", x["Pmax"] * i / guard_denominator(x["Ik"] + i))].into()
            }),
        SimulationDef::builder("bio12", "Genetics", "Genetic Drift Variance")
            .description(
                "Expected allele frequency variance accumulation from genetic drift over \
                 generations for effective population size Ne.",
            )
            .formula("Var(p_t) ≈ p(1-p)/(2Ne) * t")
            .variable(var("p", "Initial Allele p", 0.0, 1.0, 0.5).step(0.01))
            .variable(var("Ne", "Effective Pop Ne", 10.0, 10_000.0, 500.0).step(10.0))
            .variable(var("t", "Generations t", 0.0, 500.0, 50.0).step(1.0))
            .output(out("variance", "Expected Variance"))
            .compute(|x| {
                let p = x["p"];
                let variance = p * (1.0 - p) / guard_denominator(2.0 * x["Ne"]) * x["t"];
                [("variance", variance)].into()
            }),
        SimulationDef::builder("bio13", "Cellular", "Cell Division (Mitosis)")
            .description(
                "Simulate the stages of mitosis and visualize chromosome number changes during \
                 cell division.",
            )
            .formula("Stages: Prophase → Metaphase → Anaphase → Telophase → Cytokinesis")
            .variable(var("chromosomes", "Starting Chromosomes", 2.0, 64.0, 8.0).step(2.0))
            .variable(var("stage", "Stage", 1.0, 5.0, 1.0).step(1.0))
            .output(out("stage", "Stage (1-5)"))
            .output(out("chromosomeCount", "Chromosomes per Cell"))
            .compute(|x| {
                let (n, stage) = (x["chromosomes"], x["stage"]);
                [("stage", stage), ("chromosomeCount", chromosomes_per_cell(n, stage))].into()
            }),
        SimulationDef::builder("bio14", "Physiology", "Photosynthesis Bench")
            .description(
                "Leaf bench: light and CO₂ as percentages of saturation set the efficiency, \
                 which scales oxygen and glucose production.",
            )
            .formula("eff = (light / 100) * (CO₂ / 100);  O₂ = round(20 eff);  glucose = round(15 eff)")
            .variable(var("light", "Light Intensity", 0.0, 100.0, 50.0).unit("%").step(1.0))
            .variable(var("co2", "CO₂ Level", 0.0, 100.0, 30.0).unit("%").step(1.0))
            .output(out("efficiency", "Efficiency"))
            .output(out("oxygen", "O₂ Produced").unit("units"))
            .output(out("glucose", "Glucose Produced").unit("units"))
            .compute(|x| {
                let eff = photosynthesis_efficiency(x["light"], x["co2"]);
                [
                    ("efficiency", eff),
                    ("oxygen", (OXYGEN_PER_EFFICIENCY * eff).round()),
                    ("glucose", (GLUCOSE_PER_EFFICIENCY * eff).round()),
                ]
                .into()
            }),
    ]
}
