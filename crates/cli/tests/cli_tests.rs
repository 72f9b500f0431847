use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("sandwich-map").unwrap();
    cmd.env_remove("DATABASE_URL").env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NYC sandwich price map"));
}

#[test]
fn test_cli_serve_help() {
    cmd()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("port").and(predicate::str::contains("5003")));
}

#[test]
fn test_cli_list_empty_memory_store() {
    cmd().arg("list").assert().success().stdout(predicate::str::contains("[]"));
}

#[test]
fn test_cli_seed_memory_store() {
    cmd()
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted 3 price records and 2 bagel vendors"));
}

#[test]
fn test_cli_nearby_rejects_zero_radius() {
    cmd()
        .args(["nearby", "--lat", "40.7128", "--lon", "-74.0060", "--radius", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid radius"));
}

#[test]
fn test_cli_nearby_rejects_unknown_metric() {
    cmd()
        .args(["nearby", "--lat", "40.7128", "--lon", "-74.0060", "--metric", "manhattan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown distance metric"));
}

#[test]
fn test_cli_nearby_requires_coordinates() {
    cmd().args(["nearby", "--lat", "40.7"]).assert().failure();
}
