//! End-to-end checks of the service layer against the real catalog.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use vl_app::{
    AppConfig, Labs, clear_history, evaluate_with_overrides, list_definitions, list_history,
    parse_override, record_snapshot,
};
use vl_engine::{CategoryFilter, Query};
use vl_model::Lab;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn config_in(dir: PathBuf, capacity: usize) -> AppConfig {
    AppConfig {
        history_dir: dir,
        history_capacity: capacity,
    }
}

#[test]
fn list_and_evaluate_from_catalog() {
    let labs = Labs::load().expect("catalog is valid");

    let energy = list_definitions(
        labs.registry(Lab::Physics),
        &Query::new("kinetic", CategoryFilter::All),
    );
    assert!(energy.iter().any(|s| s.id == "sim03"));

    let (lab, def) = labs.require("sim03").unwrap();
    assert_eq!(lab, Lab::Physics);
    let eval = evaluate_with_overrides(def, &[parse_override("v=20").unwrap()]).unwrap();
    assert_eq!(eval.outputs.get("KE"), Some(2000.0));
}

#[test]
fn history_records_most_recent_first_and_respects_capacity() {
    let dir = unique_temp_dir("vl_app_history");
    let config = config_in(dir.clone(), 2);
    let labs = Labs::load().unwrap();
    let (_, def) = labs.require("sim03").unwrap();

    for v in ["1", "2", "3"] {
        let eval = evaluate_with_overrides(def, &[parse_override(&format!("v={v}")).unwrap()]).unwrap();
        record_snapshot(&config, Lab::Physics, eval.snapshot()).unwrap();
    }

    let history = list_history(&config, Lab::Physics).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].variables.get("v"), Some(3.0));
    assert_eq!(history[1].variables.get("v"), Some(2.0));
    assert!(list_history(&config, Lab::Biology).unwrap().is_empty());

    clear_history(&config, Lab::Physics).unwrap();
    assert!(list_history(&config, Lab::Physics).unwrap().is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_history_starts_empty() {
    let dir = unique_temp_dir("vl_app_corrupt");
    let config = config_in(dir.clone(), 50);
    fs::create_dir_all(&dir).unwrap();
    fs::write(config.history_store().path_for(Lab::Biology), "{ not json").unwrap();

    assert!(list_history(&config, Lab::Biology).unwrap().is_empty());

    let labs = Labs::load().unwrap();
    let (_, def) = labs.require("bio01").unwrap();
    let eval = evaluate_with_overrides(def, &[]).unwrap();
    record_snapshot(&config, Lab::Biology, eval.snapshot()).unwrap();

    let history = list_history(&config, Lab::Biology).unwrap();
    assert_eq!(history.len(), 1);
    let text = fs::read_to_string(config.history_store().path_for(Lab::Biology)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json[0]["definitionId"], "bio01");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn config_file_round_trip() {
    let dir = unique_temp_dir("vl_app_config");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("virtual-lab.yaml");
    fs::write(&path, "history_dir: /tmp/elsewhere\nhistory_capacity: 7\n").unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.history_capacity, 7);
    assert_eq!(config.history_dir, PathBuf::from("/tmp/elsewhere"));

    let _ = fs::remove_dir_all(&dir);
}
