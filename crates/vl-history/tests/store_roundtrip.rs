use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{TimeZone, Utc};
use vl_history::{HistoryError, HistoryRecorder, HistoryStore};
use vl_model::{Lab, OutputAssignment, Snapshot, VariableAssignment};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn snapshot(def: &str, ke: f64, second: u32) -> Snapshot {
    let vars: VariableAssignment =
        serde_json::from_str(r#"{"m":10.0,"v":15.0}"#).expect("valid assignment json");
    let outputs: OutputAssignment = [("KE", ke)].into();
    let at = Utc.with_ymd_and_hms(2026, 2, 25, 12, 0, second).unwrap();
    Snapshot::at(def, vars, outputs, at)
}

#[test]
fn missing_file_loads_empty() {
    let store = HistoryStore::new(unique_temp_dir("vl_history_missing"));
    let recorder = store.load(Lab::Physics, 50).unwrap();
    assert!(recorder.is_empty());
    assert_eq!(recorder.capacity(), 50);
}

#[test]
fn save_then_load_keeps_order_and_values() {
    let dir = unique_temp_dir("vl_history_roundtrip");
    let store = HistoryStore::new(&dir);

    let mut recorder = HistoryRecorder::new(10);
    recorder.record(snapshot("sim03", 1125.0, 0));
    recorder.record(snapshot("sim04", f64::NAN, 1));
    store.save(Lab::Physics, &recorder).unwrap();

    assert!(dir.join("physics_experiments.json").exists());

    let loaded = store.load(Lab::Physics, 10).unwrap();
    let ids: Vec<&str> = loaded.list().map(|s| s.definition_id.as_str()).collect();
    assert_eq!(ids, vec!["sim04", "sim03"]);

    let newest = loaded.latest().unwrap();
    assert!(newest.outputs.get("KE").unwrap().is_nan());
    let oldest = loaded.list().last().unwrap();
    assert_eq!(oldest.outputs.get("KE"), Some(1125.0));
    assert_eq!(oldest.variables.get("v"), Some(15.0));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn labs_use_separate_files() {
    let dir = unique_temp_dir("vl_history_labs");
    let store = HistoryStore::new(&dir);

    let mut recorder = HistoryRecorder::default();
    recorder.record(snapshot("bio01", 33.3, 0));
    store.save(Lab::Biology, &recorder).unwrap();

    assert_eq!(store.load(Lab::Biology, 50).unwrap().len(), 1);
    assert!(store.load(Lab::Chemistry, 50).unwrap().is_empty());

    store.clear(Lab::Biology).unwrap();
    assert!(store.load(Lab::Biology, 50).unwrap().is_empty());
    // clearing twice is fine
    store.clear(Lab::Biology).unwrap();

    fs::remove_dir_all(dir).ok();
}

#[test]
fn load_applies_smaller_capacity() {
    let dir = unique_temp_dir("vl_history_capacity");
    let store = HistoryStore::new(&dir);

    let mut recorder = HistoryRecorder::new(50);
    for i in 0..51u32 {
        recorder.record(snapshot(&format!("sim{:02}", i % 100 + 1), i as f64, i % 60));
    }
    assert_eq!(recorder.len(), 50);
    store.save(Lab::Physics, &recorder).unwrap();

    let loaded = store.load(Lab::Physics, 5).unwrap();
    assert_eq!(loaded.len(), 5);
    assert_eq!(loaded.latest().unwrap().outputs.get("KE"), Some(50.0));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn corrupt_file_is_a_json_error() {
    let dir = unique_temp_dir("vl_history_corrupt");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("chemistry_experiments.json"), "{not json").unwrap();

    let store = HistoryStore::new(&dir);
    assert!(matches!(store.load(Lab::Chemistry, 50), Err(HistoryError::Json(_))));

    fs::remove_dir_all(dir).ok();
}
