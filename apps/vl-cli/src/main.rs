use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vl_app::{
    AppConfig, AppError, AppResult, Labs, analysis_request, build_circuit, build_mixture,
    evaluate_with_overrides, express_dna, launch, list_definitions, list_history, parse_override,
    record_snapshot,
};
use vl_catalog::Connection;
use vl_core::format_value;
use vl_engine::{CategoryFilter, Query};
use vl_model::{Lab, SimulationDef};

#[derive(Parser)]
#[command(name = "vl-cli")]
#[command(about = "Virtual Lab CLI - browse and evaluate lab simulations", long_about = None)]
struct Cli {
    /// Path to the YAML config file
    #[arg(long, global = true, default_value = "virtual-lab.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the labs and how many simulations each holds
    Labs,
    /// List simulations in a lab
    List {
        /// chemistry, physics or biology
        lab: Lab,
        /// Case-insensitive text matched against name, category and description
        #[arg(short, long, default_value = "")]
        search: String,
        /// Category name, or "all"
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List the categories of a lab
    Categories { lab: Lab },
    /// Show variables and outputs of one simulation
    Show { id: String },
    /// Evaluate a simulation at its defaults, with optional overrides
    Eval {
        id: String,
        /// Override a variable, e.g. --set v=20 (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
        /// Record the result in the lab history
        #[arg(long)]
        save: bool,
    },
    /// Show saved experiments of a lab, most recent first
    History {
        lab: Lab,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Mix bench reagents and report pH and known reactions
    Mix {
        /// Reagent name or formula, optionally with a volume: HCl:25
        #[arg(required = true, value_name = "REAGENT[:ML]")]
        reagents: Vec<String>,
    },
    /// Print the request the reaction analyser would receive
    AnalysisRequest {
        #[arg(required = true, value_name = "REAGENT[:ML]")]
        reagents: Vec<String>,
        /// Bench temperature in degrees Celsius
        #[arg(long, default_value_t = 25.0)]
        temperature: f64,
        #[arg(long)]
        heating: bool,
        /// Print the model prompt instead of the JSON body
        #[arg(long)]
        prompt: bool,
    },
    /// Transcribe a DNA template strand and translate it to protein
    Dna {
        #[arg(default_value = vl_bio::DEFAULT_DNA)]
        sequence: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Solve a battery, bulb and resistor network
    Circuit {
        /// battery:VOLTS, bulb:OHMS or resistor:OHMS
        #[arg(required = true, value_name = "KIND:VALUE")]
        components: Vec<String>,
        /// series or parallel
        #[arg(long, default_value = "series")]
        batteries: Connection,
        #[arg(long, default_value = "series")]
        bulbs: Connection,
        #[arg(long, default_value = "series")]
        resistors: Connection,
    },
    /// Flight of a projectile launched from a height, with trajectory points
    Trajectory {
        /// Degrees above horizontal
        #[arg(long, default_value_t = 45.0)]
        angle: f64,
        /// m/s
        #[arg(long, default_value_t = 20.0)]
        velocity: f64,
        /// m
        #[arg(long, default_value_t = 10.0)]
        height: f64,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;
    tracing::debug!(config = %cli.config.display(), ?config, "config loaded");

    match cli.command {
        Commands::Labs => cmd_labs(),
        Commands::List {
            lab,
            search,
            category,
        } => cmd_list(lab, search, category),
        Commands::Categories { lab } => cmd_categories(lab),
        Commands::Show { id } => cmd_show(&id),
        Commands::Eval {
            id,
            overrides,
            save,
        } => cmd_eval(&config, &id, &overrides, save),
        Commands::History { lab, limit } => cmd_history(&config, lab, limit),
        Commands::Mix { reagents } => cmd_mix(&reagents),
        Commands::AnalysisRequest {
            reagents,
            temperature,
            heating,
            prompt,
        } => cmd_analysis_request(&reagents, temperature, heating, prompt),
        Commands::Dna { sequence, json } => cmd_dna(&sequence, json),
        Commands::Circuit {
            components,
            batteries,
            bulbs,
            resistors,
        } => cmd_circuit(&components, batteries, bulbs, resistors),
        Commands::Trajectory {
            angle,
            velocity,
            height,
        } => cmd_trajectory(angle, velocity, height),
    }
}

fn cmd_labs() -> AppResult<()> {
    let labs = Labs::load()?;
    for (lab, registry) in labs.iter() {
        println!(
            "  {:<10} {:>4} simulations  ({} categories)",
            lab.name(),
            registry.len(),
            registry.category_names().len()
        );
    }
    Ok(())
}

fn cmd_list(lab: Lab, search: String, category: Option<String>) -> AppResult<()> {
    let labs = Labs::load()?;
    let category = category
        .map(|c| CategoryFilter::from_str(&c).unwrap_or_default())
        .unwrap_or_default();
    let summaries = list_definitions(labs.registry(lab), &Query::new(search, category));

    if summaries.is_empty() {
        println!("No simulations match");
        return Ok(());
    }
    for s in summaries {
        println!("  {:<7} {:<18} {}", s.id, s.category, s.name);
    }
    Ok(())
}

fn cmd_categories(lab: Lab) -> AppResult<()> {
    let labs = Labs::load()?;
    for category in labs.registry(lab).categories() {
        println!("  {category}");
    }
    Ok(())
}

fn unit_suffix(unit: Option<&str>) -> String {
    unit.map(|u| format!(" {u}")).unwrap_or_default()
}

fn cmd_show(id: &str) -> AppResult<()> {
    let labs = Labs::load()?;
    let (lab, def) = labs.require(id)?;

    println!("{} - {} [{} / {}]", def.id, def.name, lab, def.category);
    if !def.description.is_empty() {
        println!("  {}", def.description);
    }
    if let Some(formula) = &def.formula {
        println!("  Formula: {formula}");
    }

    println!("Variables:");
    for v in &def.variables {
        println!(
            "  {:<10} {:<28} default {}{}  range [{}, {}]",
            v.key,
            v.label,
            format_value(v.default),
            unit_suffix(v.unit.as_deref()),
            format_value(v.min),
            format_value(v.max),
        );
    }
    println!("Outputs:");
    for o in &def.outputs {
        println!("  {:<10} {}{}", o.key, o.label, unit_suffix(o.unit.as_deref()));
    }
    Ok(())
}

fn print_outputs(def: &SimulationDef, outputs: &vl_model::OutputAssignment) {
    for (key, value) in outputs.iter() {
        let (label, unit) = match def.output(key) {
            Some(o) => (o.label.as_str(), o.unit.as_deref()),
            None => (key, None),
        };
        println!("  {:<28} {}{}", label, format_value(value), unit_suffix(unit));
    }
}

fn cmd_eval(config: &AppConfig, id: &str, overrides: &[String], save: bool) -> AppResult<()> {
    let labs = Labs::load()?;
    let (lab, def) = labs.require(id)?;
    let overrides = overrides
        .iter()
        .map(String::as_str)
        .map(parse_override)
        .collect::<AppResult<Vec<_>>>()?;

    let evaluation = evaluate_with_overrides(def, &overrides)?;
    println!("{} - {}", def.id, def.name);
    for (key, value) in evaluation.variables.iter() {
        println!("  {key} = {}", format_value(value));
    }
    print_outputs(def, &evaluation.outputs);

    if save {
        let snapshot = evaluation.snapshot();
        let snapshot_id = snapshot.id;
        record_snapshot(config, lab, snapshot)?;
        println!("✓ Saved to {lab} history: {snapshot_id}");
    }
    Ok(())
}

fn cmd_history(config: &AppConfig, lab: Lab, limit: usize) -> AppResult<()> {
    let labs = Labs::load()?;
    let history = list_history(config, lab)?;
    if history.is_empty() {
        println!("No saved experiments for {lab}");
        return Ok(());
    }

    for snapshot in history.iter().take(limit) {
        let name = labs
            .registry(lab)
            .get(&snapshot.definition_id)
            .map(|d| d.name.as_str())
            .unwrap_or("(unknown simulation)");
        println!(
            "{}  {}  {}",
            snapshot.timestamp.format("%Y-%m-%d %H:%M:%S"),
            snapshot.definition_id,
            name
        );
        let outputs: Vec<String> = snapshot
            .outputs
            .iter()
            .map(|(k, v)| format!("{k}={}", format_value(v)))
            .collect();
        println!("    {}", outputs.join("  "));
    }
    if history.len() > limit {
        println!("  ... {} more", history.len() - limit);
    }
    Ok(())
}

fn cmd_mix(reagents: &[String]) -> AppResult<()> {
    let mixture = build_mixture(reagents)?;
    for entry in mixture.entries() {
        println!(
            "  {:<24} {:<10} {:>6} ml",
            entry.reagent.name,
            entry.reagent.formula,
            format_value(entry.volume_ml)
        );
    }
    println!("pH: {:.2}", mixture.ph());

    let reactions = mixture.known_reactions();
    if reactions.is_empty() {
        println!("{}", vl_chem::NO_REACTION);
    }
    for reaction in reactions {
        let products: Vec<&str> = reaction
            .products
            .iter()
            .filter_map(|id| vl_chem::BENCH.iter().find(|r| r.id == *id))
            .map(|r| r.name)
            .collect();
        println!("{}", reaction.description);
        println!("  Products: {}", products.join(", "));
    }
    Ok(())
}

fn cmd_analysis_request(
    reagents: &[String],
    temperature: f64,
    heating: bool,
    prompt: bool,
) -> AppResult<()> {
    let request = analysis_request(reagents, temperature, heating)?;
    if prompt {
        println!("{}", request.prompt());
        return Ok(());
    }
    let json = serde_json::to_string_pretty(&request)
        .map_err(|e| AppError::InvalidInput(format!("cannot encode request: {e}")))?;
    println!("{json}");
    Ok(())
}

fn cmd_dna(sequence: &str, json: bool) -> AppResult<()> {
    let expression = express_dna(sequence)?;
    if json {
        let json = serde_json::to_string_pretty(&expression)
            .map_err(|e| AppError::InvalidInput(format!("cannot encode expression: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    println!("  DNA     {}", expression.dna);
    println!("  mRNA    {}", expression.rna);
    let protein = expression.protein();
    println!("  Protein {}", if protein.is_empty() { "(none)" } else { protein.as_str() });
    if let Some(stop) = &expression.stop_codon {
        println!("  Stopped at {stop}");
    }
    Ok(())
}

fn cmd_circuit(
    components: &[String],
    batteries: Connection,
    bulbs: Connection,
    resistors: Connection,
) -> AppResult<()> {
    let circuit = build_circuit(components, batteries, bulbs, resistors)?;
    println!("  batteries {batteries}, bulbs {bulbs}, resistors {resistors}");
    println!("  Voltage     {} V", format_value(circuit.voltage()));
    println!("  Resistance  {} Ω", format_value(circuit.resistance()));
    match circuit.solve() {
        Some(reading) => {
            println!("  Current     {} A", format_value(reading.current));
            println!("  Power       {} W", format_value(reading.power));
        }
        None => println!("  No load: add a bulb or resistor to close the circuit"),
    }
    Ok(())
}

fn cmd_trajectory(angle: f64, velocity: f64, height: f64) -> AppResult<()> {
    let launch = launch(angle, velocity, height)?;
    let flight = launch.flight();
    println!("  Flight time {} s", format_value(flight.time));
    println!("  Max height  {} m", format_value(flight.max_height));
    println!("  Range       {} m", format_value(flight.range));
    println!("  {:>8} {:>10} {:>10}", "t (s)", "x (m)", "y (m)");
    for (i, (x, y)) in launch.trajectory().into_iter().enumerate() {
        let t = i as f64 * vl_catalog::TRAJECTORY_STEP_S;
        println!("  {:>8.1} {:>10.2} {:>10.2}", t, x, y);
    }
    Ok(())
}
