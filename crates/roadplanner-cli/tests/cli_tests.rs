//! Integration tests for the seed and cities commands and global options.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    cargo_bin_cmd!("roadplanner")
}

#[test]
fn seed_into_directory_uses_default_filename() {
    let temp_dir = tempdir().expect("create temp dir");
    cli()
        .env("RUST_LOG", "error")
        .arg("--db")
        .arg(temp_dir.path())
        .arg("seed")
        .assert()
        .success();

    assert!(temp_dir.path().join("nh_routes.db").is_file());
}

#[test]
fn seed_json_reports_route_count() {
    let temp_dir = tempdir().expect("create temp dir");
    let db_path = temp_dir.path().join("routes.db");
    let output = cli()
        .env("RUST_LOG", "error")
        .args(["--format", "json", "seed", "--db"])
        .arg(&db_path)
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["routes"], 149);
}

#[test]
fn cities_lists_seeded_network() {
    let temp_dir = tempdir().expect("create temp dir");
    let db_path = temp_dir.path().join("nh_routes.db");
    cli()
        .env("RUST_LOG", "error")
        .arg("--db")
        .arg(&db_path)
        .arg("seed")
        .assert()
        .success();

    cli()
        .env("RUST_LOG", "error")
        .env("ROADPLANNER_DB", &db_path)
        .arg("cities")
        .assert()
        .success()
        .stdout(predicate::str::contains("102 cities:"))
        .stdout(predicate::str::contains("Ahmedabad"))
        .stdout(predicate::str::contains("Thiruvananthapuram"));
}

#[test]
fn help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("cities"));
}
