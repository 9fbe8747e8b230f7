use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const SEED: &str = r#"[
    {"name": "Pasta Place", "style": "Italian", "address": "1 Main St",
     "openHour": "11:00", "closeHour": "22:00", "vegetarian": true, "deliveries": true},
    {"name": "Night Owl", "style": "Korean", "address": "9 Late Ave",
     "openHour": "22:00", "closeHour": "02:00", "vegetarian": false, "deliveries": true}
]"#;

fn eatery(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("eatery").unwrap();
    cmd.env_remove("EATERY_STORE_BACKEND")
        .env_remove("EATERY_STORE_ENDPOINT")
        .env_remove("RESTAURANT_TABLE")
        .args(["--store", "file", "--data-dir"])
        .arg(data_dir);
    cmd
}

fn seed(data_dir: &Path) {
    let seed_path = data_dir.join("seed.json");
    std::fs::write(&seed_path, SEED).unwrap();
    eatery(data_dir)
        .args(["seed", "--file"])
        .arg(&seed_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Seeded 2 record(s) into table 'Restaurants'",
        ));
}

#[test]
fn styles_lists_every_known_style() {
    Command::cargo_bin("eatery")
        .unwrap()
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("italian").and(predicate::str::contains("vegan")));
}

#[test]
fn seeded_store_serves_open_recommendation() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    eatery(dir.path())
        .args(["recommend", "Vegetarian ITALIAN with delivery, open now", "--at", "12:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"recommended\""))
        .stdout(predicate::str::contains("pasta place"));
}

#[test]
fn closed_restaurant_is_no_match_not_error() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    eatery(dir.path())
        .args(["recommend", "korean open now", "--at", "15:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"no_match\""))
        .stdout(predicate::str::contains("No matching restaurant found"));
}

#[test]
fn unsupported_style_fails_with_client_error() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    eatery(dir.path())
        .args(["recommend", "Thai food", "--at", "12:00"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"status\": \"client_error\""))
        .stdout(predicate::str::contains("unsupported_style"));
}

#[test]
fn missing_table_file_is_service_unavailable() {
    let dir = tempdir().unwrap();

    eatery(dir.path())
        .args(["recommend", "italian food", "--at", "12:00"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"status\": \"service_unavailable\""));
}

#[test]
fn invalid_at_time_is_rejected() {
    let dir = tempdir().unwrap();

    eatery(dir.path())
        .args(["recommend", "italian food", "--at", "noon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --at value"));
}
