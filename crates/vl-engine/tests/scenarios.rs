//! Worked examples for the registry, filter and engine.

use vl_core::{Tolerances, guard_denominator, nearly_equal};
use vl_engine::{
    CategoryFilter, EngineError, Query, Registry, evaluate, filter, initial_assignment,
    set_variable,
};
use vl_model::{OutputAssignment, OutputDef, SimulationDef, VariableDef};

fn kinetic_energy() -> SimulationDef {
    SimulationDef::builder("sim03", "Energy", "Kinetic Energy")
        .description("KE = 1/2 m v^2")
        .variable(VariableDef::new("m", "Mass", 0.0, 200.0, 10.0).unit("kg"))
        .variable(VariableDef::new("v", "Velocity", 0.0, 100.0, 15.0).unit("m/s"))
        .output(OutputDef::new("KE", "Kinetic Energy").unit("J"))
        .compute(|x| [("KE", 0.5 * x["m"] * x["v"] * x["v"])].into())
}

fn michaelis_menten() -> SimulationDef {
    SimulationDef::builder("bio01", "Enzyme", "Michaelis-Menten Enzyme Kinetics")
        .variable(VariableDef::new("S", "Substrate [S]", 0.0, 50.0, 10.0).unit("mM"))
        .variable(VariableDef::new("Vmax", "Vmax", 0.1, 100.0, 50.0).unit("µM/s"))
        .variable(VariableDef::new("Km", "Km", 0.1, 30.0, 5.0).unit("mM"))
        .output(OutputDef::new("v", "Reaction Rate v").unit("µM/s"))
        .compute(|x| [("v", x["Vmax"] * x["S"] / guard_denominator(x["Km"] + x["S"]))].into())
}

fn named(name: &str, category: &str) -> SimulationDef {
    SimulationDef::builder(name.to_lowercase().replace(' ', "-"), category, name)
        .compute(|_| OutputAssignment::new())
}

#[test]
fn kinetic_energy_scenario() {
    let def = kinetic_energy();
    let a = initial_assignment(&def);
    assert_eq!(evaluate(&def, &a).get("KE"), Some(1125.0));

    let still = set_variable(&def, &a, "m", 0.0).unwrap();
    assert_eq!(evaluate(&def, &still).get("KE"), Some(0.0));

    let err = set_variable(&def, &a, "mass", 12.0).unwrap_err();
    assert!(matches!(err, EngineError::UnknownVariableKey { ref key, .. } if key == "mass"));
    assert_eq!(a.get("m"), Some(10.0));
    assert_eq!(a.get("v"), Some(15.0));
}

#[test]
fn michaelis_menten_scenario() {
    let def = michaelis_menten();
    let a = initial_assignment(&def);
    let v = evaluate(&def, &a).get("v").unwrap();
    assert!(nearly_equal(v, 50.0 * 10.0 / 15.0, Tolerances::default()));
    assert!((v - 33.33).abs() < 0.01);

    let empty = set_variable(&def, &a, "S", 0.0).unwrap();
    assert_eq!(evaluate(&def, &empty).get("v"), Some(0.0));

    // Km + S == 0 only off-range; the guard keeps the result finite
    let degenerate = set_variable(&def, &empty, "Km", 0.0).unwrap();
    assert_eq!(evaluate(&def, &degenerate).get("v"), Some(0.0));
}

#[test]
fn filter_scenario() {
    let reg = Registry::new(vec![
        named("Ohm's Law", "Electricity"),
        named("Projectile Range", "Kinematics"),
    ])
    .unwrap();

    let ohm = filter(&reg, &Query::new("ohm", CategoryFilter::All));
    assert_eq!(ohm.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(), vec!["Ohm's Law"]);

    let kin = filter(&reg, &Query::new("", "Kinematics".parse().unwrap()));
    assert_eq!(
        kin.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
        vec!["Projectile Range"]
    );
}

#[test]
fn registry_shares_definitions_with_sessions() {
    let reg = Registry::new(vec![kinetic_energy(), michaelis_menten()]).unwrap();
    let mut session = vl_engine::Session::new();
    session.select_id(&reg, "bio01").unwrap();
    let v = session.set_variable("S", 5.0).unwrap().get("v").unwrap();
    assert!(nearly_equal(v, 25.0, Tolerances::default()));
    assert_eq!(reg.list().len(), 2);
}

#[test]
fn misspelled_key_behind_a_branch_fails_registration() {
    let def = SimulationDef::builder("branchy", "Test", "Branchy")
        .variable(VariableDef::new("x", "X", 0.0, 10.0, 1.0))
        .output(OutputDef::new("y", "Y"))
        .compute(|x| {
            let y = if x["x"] > 5.0 { x["mass"] } else { x["x"] };
            [("y", y)].into()
        });

    let err = Registry::new(vec![def]).unwrap_err();
    assert_eq!(
        err,
        vl_model::ConfigurationError::UndeclaredInput {
            definition_id: "branchy".to_string(),
            key: "mass".to_string(),
        }
    );
}
