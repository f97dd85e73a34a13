//! End-to-end tests for the `radar` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PROJECT: &[(&str, &str)] = &[
    ("app/__init__.py", ""),
    ("app/models.py", "import os\n"),
    ("app/views.py", "from .models import User\n"),
    ("app/urls.py", "from .views import index\n"),
    ("web/index.ts", "import { api } from './api';\nimport './missing';\n"),
    ("web/api.ts", "export const api = 1;\n"),
];

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    for (rel, content) in PROJECT {
        write(temp.path(), rel, content);
    }
    temp
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn radar(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_radar"));
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("RADAR_MAX_DEPTH")
        .env_remove("RADAR_MAX_FILES")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn graph_prints_summary_and_writes_json() {
    let temp = project();

    radar(temp.path())
        .args(["--no-color", "graph", "--root", ".", "--json", "out/graph.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Graph Summary"))
        .stderr(predicate::str::contains("Unresolved"))
        .stderr(predicate::str::contains("Wrote graph JSON"));

    let json = fs::read_to_string(temp.path().join("out/graph.json")).unwrap();
    let export: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(export["nodes"].as_array().unwrap().len(), PROJECT.len());
    let edges = export["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 3);
    assert!(edges.contains(&serde_json::json!({ "from": "app/views.py", "to": "app/models.py" })));
}

#[test]
fn no_color_flag_strips_ansi_even_when_forced() {
    let temp = project();

    let output = radar(temp.path())
        .env_remove("NO_COLOR")
        .env("FORCE_COLOR", "1")
        .args(["--no-color", "graph", "--root", ".", "--max-files", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Graph Summary"));
    assert!(!stderr.contains('\u{1b}'), "unexpected escape codes in {stderr:?}");
}

#[test]
fn graph_writes_dot() {
    let temp = project();

    radar(temp.path())
        .args(["graph", "--root", ".", "--dot", "graph.dot"])
        .assert()
        .success();

    let dot = fs::read_to_string(temp.path().join("graph.dot")).unwrap();
    assert!(dot.starts_with("digraph Dependencies {"));
    assert!(dot.contains("\"web/index.ts\" -> \"web/api.ts\""));
}

#[test]
fn impact_lists_transitive_dependents() {
    let temp = project();

    radar(temp.path())
        .args(["impact", "app/models.py", "--root", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("1  app/views.py"))
        .stdout(predicate::str::contains("2  app/urls.py"))
        .stdout(predicate::str::contains("web/").not());
}

#[test]
fn impact_json_report() {
    let temp = project();

    let output = radar(temp.path())
        .args(["impact", "app/models.py", "docs/readme.md", "--json", "--root", "."])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["changed"], serde_json::json!(["app/models.py"]));
    assert_eq!(report["missing"], serde_json::json!(["docs/readme.md"]));
    assert_eq!(report["maxDepth"], 4);
    assert_eq!(report["total"], 2);
    assert_eq!(report["impacted"][0]["path"], "app/views.py");
    assert_eq!(report["impacted"][0]["depth"], 1);
}

#[test]
fn config_file_limits_depth() {
    let temp = project();
    write(temp.path(), "radar.toml", "maxDepth = 1\n");

    radar(temp.path())
        .args(["impact", "app/models.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app/views.py"))
        .stdout(predicate::str::contains("app/urls.py").not());
}

#[test]
fn out_of_range_depth_is_clamped_with_warning() {
    let temp = project();

    radar(temp.path())
        .args(["impact", "app/models.py", "--max-depth", "99"])
        .assert()
        .success()
        .stderr(predicate::str::contains("maxDepth 99 is outside 1..=12, using 12"));
}

#[test]
fn missing_root_fails() {
    let temp = TempDir::new().unwrap();

    radar(temp.path())
        .args(["graph", "--root", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = project();

    radar(temp.path())
        .args(["--config", "nope.toml", "graph"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn zero_jobs_rejected() {
    let temp = project();

    radar(temp.path())
        .args(["graph", "--jobs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}
