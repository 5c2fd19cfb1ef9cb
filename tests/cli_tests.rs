use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{backups_of, healthlog, sample_csv, setup_test_db, temp_out, write_csv};

fn update(db: &str, csv: &str) {
    healthlog()
        .args(["--db", db, "update", "--csv", csv])
        .assert()
        .success();
}

#[test]
fn test_init_creates_empty_store() {
    let db = setup_test_db("cli_init");

    healthlog()
        .args(["--db", &db, "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    healthlog()
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(contains("not populated"));
}

#[test]
fn test_init_refuses_existing_store_without_force() {
    let db = setup_test_db("cli_init_force");
    let csv = sample_csv("cli_init_force");

    update(&db, &csv);

    healthlog()
        .args(["--db", &db, "init"])
        .assert()
        .failure()
        .stderr(contains("--force"));

    healthlog()
        .args(["--db", &db, "init", "--force"])
        .assert()
        .success();

    healthlog()
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(contains("not populated"));
}

#[test]
fn test_update_from_csv_reports_errors_and_timestamp() {
    let db = setup_test_db("cli_update");
    let csv = sample_csv("cli_update");

    healthlog()
        .args(["--db", &db, "update", "--csv", &csv])
        .assert()
        .success()
        .stdout(contains("Database updated: 5 rows, 5 events, 2 drinks, 1 weeks"))
        .stdout(contains("unpaired_stop"))
        .stdout(contains("Last updated:"));

    assert!(backups_of(&db).is_empty());
}

#[test]
fn test_update_truncates_error_list() {
    let db = setup_test_db("cli_update_many_errors");
    let stops: Vec<String> = (1..=12).map(|h| format!("1/5/2021 {h}:00:00")).collect();
    let records: Vec<[&str; 8]> = stops
        .iter()
        .map(|ts| [ts.as_str(), "散歩", "Stop", "", "", "", "", ""])
        .collect();
    let csv = write_csv("cli_update_many_errors", &records);

    healthlog()
        .args(["--db", &db, "update", "--csv", &csv])
        .assert()
        .success()
        .stdout(contains("12 validation error(s)"))
        .stdout(contains("... and 2 more errors"));
}

#[test]
fn test_failed_update_keeps_previous_store() {
    let db = setup_test_db("cli_update_failure");
    let csv = sample_csv("cli_update_failure");
    update(&db, &csv);

    let missing = temp_out("cli_update_failure_missing", "csv");
    healthlog()
        .args(["--db", &db, "update", "--csv", &missing])
        .assert()
        .failure()
        .stderr(contains("Update failed"));

    assert!(backups_of(&db).is_empty());
    healthlog()
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(contains("ready").and(contains("Raw events   : 5")));
}

#[test]
fn test_status_on_missing_store() {
    let db = setup_test_db("cli_status_missing");

    healthlog()
        .args(["--db", &db, "status"])
        .assert()
        .success()
        .stdout(contains("missing"));
    assert!(!Path::new(&db).exists());
}

#[test]
fn test_weekly_table() {
    let db = setup_test_db("cli_weekly");
    let csv = sample_csv("cli_weekly");
    update(&db, &csv);

    healthlog()
        .args(["--db", &db, "weekly"])
        .assert()
        .success()
        .stdout(contains("2021-01-04").and(contains("2021-01-10")).and(contains("3.5")));

    healthlog()
        .args(["--db", &db, "weekly", "--range", "2022"])
        .assert()
        .success()
        .stdout(contains("No weekly totals"));

    healthlog()
        .args(["--db", &db, "weekly", "--range", "20xx"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_weekly_before_update() {
    let db = setup_test_db("cli_weekly_empty");

    healthlog()
        .args(["--db", &db, "weekly"])
        .assert()
        .success()
        .stdout(contains("not populated"));
}

#[test]
fn test_export_csv_and_json() {
    let db = setup_test_db("cli_export");
    let csv = sample_csv("cli_export");
    update(&db, &csv);

    let out_csv = temp_out("cli_export", "csv");
    healthlog()
        .args(["--db", &db, "export", "--format", "csv", "--file", &out_csv])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out_csv).unwrap();
    assert!(content.starts_with("week_start_date,week_end_date,total_quantity,event_count"));
    assert!(content.contains("2021-01-04,2021-01-10,3.5,2"));

    let out_json = temp_out("cli_export", "json");
    healthlog()
        .args(["--db", &db, "export", "--format", "json", "--file", &out_json, "--range", "2021-01"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out_json).unwrap()).unwrap();
    assert_eq!(json[0]["week_start_date"], "2021-01-04");
    assert_eq!(json[0]["total_quantity"], 3.5);
    assert_eq!(json[0]["event_count"], 2);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db = setup_test_db("cli_export_force");
    let csv = sample_csv("cli_export_force");
    update(&db, &csv);

    let out = temp_out("cli_export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    healthlog()
        .args(["--db", &db, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    healthlog()
        .args(["--db", &db, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("2021-01-04"));
}

#[test]
fn test_config_print_and_bad_config() {
    let cfg = temp_out("cli_config", "yaml");
    fs::write(&cfg, "timezone: Europe/Rome\nweek-start-day: Sunday\n").unwrap();

    healthlog()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Europe/Rome").and(contains("week-start-day: Sunday")));

    let bad = temp_out("cli_config_bad", "yaml");
    fs::write(&bad, "timezone: Nowhere/Special\n").unwrap();
    let db = setup_test_db("cli_config_bad");

    healthlog()
        .args(["--config", &bad, "--db", &db, "status"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
