//! End-to-end tests for the carfinder binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Command isolated from the user's config and garage
fn carfinder(dir: &Path) -> Command {
    let config = dir.join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[garage]\npath = {:?}\n",
            dir.join("garage.json").to_string_lossy()
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("carfinder").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_suggest_text() {
    let dir = TempDir::new().unwrap();
    carfinder(dir.path())
        .args(["suggest", "honda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Which Honda model is right for me?"))
        .stdout(predicate::str::contains("2025 Honda Civic Sport"));
}

#[test]
fn test_suggest_json() {
    let dir = TempDir::new().unwrap();
    let output = carfinder(dir.path())
        .args(["suggest", "honda", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 15);
    assert_eq!(items[0]["type"], "aiSuggestion");
    assert_eq!(items[0]["id"], "ai-make-1");
}

#[test]
fn test_suggest_without_query_prints_popular() {
    let dir = TempDir::new().unwrap();
    carfinder(dir.path())
        .arg("suggest")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Popular Searches"));
}

#[test]
fn test_suggest_no_match() {
    let dir = TempDir::new().unwrap();
    carfinder(dir.path())
        .args(["suggest", "zzzznomatch"])
        .assert()
        .success()
        .stdout("No suggestions\n");
}

#[test]
fn test_missing_catalog_fails() {
    let dir = TempDir::new().unwrap();
    carfinder(dir.path())
        .args(["suggest", "honda", "--catalog"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog error"));
}

#[test]
fn test_malformed_config_warns() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[search\n").unwrap();

    Command::cargo_bin("carfinder")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["payment", "--price", "12000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using default settings"))
        .stdout(predicate::str::contains("Monthly payment:  $200.00"));
}

#[test]
fn test_payment() {
    let dir = TempDir::new().unwrap();
    carfinder(dir.path())
        .args([
            "payment", "--price", "25000", "--apr", "6", "--term", "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly payment:  $483.32"))
        .stdout(predicate::str::contains("Total interest:   $3,999.20"));
}

#[test]
fn test_payment_rejects_zero_term() {
    let dir = TempDir::new().unwrap();
    carfinder(dir.path())
        .args(["payment", "--price", "25000", "--term", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one month"));
}

#[test]
fn test_garage_starts_empty() {
    let dir = TempDir::new().unwrap();
    carfinder(dir.path())
        .args(["garage", "list"])
        .assert()
        .success()
        .stdout("No saved items\n");
}

#[test]
fn test_garage_list_and_remove() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("garage.json"),
        r#"[
  {
    "id": "used-u1",
    "title": "2021 Honda Accord EX-L",
    "kind": "vehicle",
    "price": 25500,
    "savedAt": "2026-01-15T10:00:00Z"
  }
]"#,
    )
    .unwrap();

    carfinder(dir.path())
        .args(["garage", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2021 Honda Accord EX-L"))
        .stdout(predicate::str::contains("$25,500"))
        .stdout(predicate::str::contains("2026-01-15"));

    carfinder(dir.path())
        .args(["garage", "remove", "used-u1"])
        .assert()
        .success()
        .stdout("Removed used-u1\n");

    carfinder(dir.path())
        .args(["garage", "remove", "used-u1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved item with id 'used-u1'"));

    let saved = std::fs::read_to_string(dir.path().join("garage.json")).unwrap();
    assert_eq!(saved.trim(), "[]");
}

const TWO_CAR_GARAGE: &str = r#"[
  {
    "id": "used-u1",
    "title": "2021 Honda Accord EX-L",
    "kind": "vehicle",
    "price": 25500,
    "savedAt": "2026-01-15T10:00:00Z"
  },
  {
    "id": "new-n4",
    "title": "2025 Ford Mustang Mach-E",
    "kind": "vehicle",
    "price": 42995,
    "savedAt": "2026-02-01T09:30:00Z"
  }
]"#;

#[test]
fn test_garage_list_filter() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("garage.json"), TWO_CAR_GARAGE).unwrap();

    carfinder(dir.path())
        .args(["garage", "list", "--filter", "mustang"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new-n4"))
        .stdout(predicate::str::contains("used-u1").not());
}

#[test]
fn test_garage_compare() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("garage.json"), TWO_CAR_GARAGE).unwrap();

    carfinder(dir.path())
        .args(["garage", "compare", "used-u1", "new-n4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2021 Honda Accord EX-L"))
        .stdout(predicate::str::contains("2025 Ford Mustang Mach-E"))
        .stdout(predicate::str::contains("$42,995"));

    carfinder(dir.path())
        .args(["garage", "compare", "used-u1", "new-n9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved item with id 'new-n9'"));
}
