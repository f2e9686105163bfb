//! End-to-end tests for the `doughcalc` binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn doughcalc() -> Command {
    Command::cargo_bin("doughcalc").expect("doughcalc binary")
}

#[test]
fn test_recipe_defaults_to_levain_text() {
    let temp = TempDir::new().unwrap();

    doughcalc()
        .current_dir(temp.path())
        .arg("recipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("For 3 balls at 403g each:"))
        .stdout(predicate::str::contains("Levain (2 nights ahead)"))
        .stdout(predicate::str::contains("Dough (1 nights ahead)"))
        .stdout(predicate::str::contains("Baker's %"));
}

#[test]
fn test_recipe_json_is_parseable() {
    let temp = TempDir::new().unwrap();

    let output = doughcalc()
        .current_dir(temp.path())
        .args(["recipe", "--starter", "none", "--nights", "0", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let sections: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sections = sections.as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[1]["title"], "Yeast (8 hours ahead)");
    assert_eq!(sections[1]["rows"][1]["weightGrams"], "3.99g");
}

#[test]
fn test_recipe_markdown_alias() {
    let temp = TempDir::new().unwrap();

    doughcalc()
        .current_dir(temp.path())
        .args(["recipe", "--starter", "poolish", "--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Dough recipe"))
        .stdout(predicate::str::contains("## Poolish (2 nights ahead)"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("doughcalc.toml"),
        r#"
[defaults]
pie_count = 4
pie_size = 12.0
starter = "biga"

[output]
format = "markdown"
"#,
    )
    .unwrap();

    doughcalc()
        .current_dir(temp.path())
        .arg("recipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("## For 4 balls at 271g each:"))
        .stdout(predicate::str::contains("## Biga (2 nights ahead)"));
}

#[test]
fn test_cli_flag_beats_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("doughcalc.toml"),
        "[defaults]\npie_count = 4\n",
    )
    .unwrap();

    doughcalc()
        .current_dir(temp.path())
        .args(["recipe", "--pie-count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("For 2 balls at"));
}

#[test]
fn test_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("custom.toml");
    fs::write(&cfg, "[defaults]\nnights_aging = 0\n").unwrap();

    doughcalc()
        .current_dir(temp.path())
        .arg("recipe")
        .arg("--config")
        .arg(&cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dough (8 hours ahead)"));
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("doughcalc.toml"), "[defaults]\nstarter = 3\n").unwrap();

    doughcalc()
        .current_dir(temp.path())
        .arg("recipe")
        .assert()
        .code(1);
}

#[test]
fn test_out_of_range_flag_is_rejected() {
    let temp = TempDir::new().unwrap();

    doughcalc()
        .current_dir(temp.path())
        .args(["recipe", "--nights", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--nights"));

    doughcalc()
        .current_dir(temp.path())
        .args(["recipe", "--oven-temp", "1200"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_starter_is_rejected() {
    let temp = TempDir::new().unwrap();

    doughcalc()
        .current_dir(temp.path())
        .args(["recipe", "--starter", "sourdough"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown starter"));
}

#[test]
fn test_out_writes_file_and_creates_dirs() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("nested").join("recipe.md");

    doughcalc()
        .current_dir(temp.path())
        .args(["recipe", "--format", "markdown", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.contains("## Levain (2 nights ahead)"));
}

#[test]
fn test_starters_listing() {
    doughcalc()
        .arg("starters")
        .assert()
        .success()
        .stdout(predicate::str::contains("Poolish (100% Hydration)"))
        .stdout(predicate::str::contains("levain-culture"));
}

#[test]
fn test_starters_json() {
    let output = doughcalc()
        .args(["starters", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["starters"].as_array().unwrap().len(), 4);
    assert_eq!(value["starters"][2]["profile"]["kind"], "pre_ferment");
    assert_eq!(value["starters"][2]["profile"]["hydration_percent"], 70.0);
    assert_eq!(value["yeasts"][3]["yeast"], "levain-culture");
}
