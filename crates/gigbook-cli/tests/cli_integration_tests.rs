//! CLI integration tests
//!
//! Drive the built binary against a scratch database file.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(db_path: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_gigbook-cli");
    Command::new(cli_bin)
        .arg("--db")
        .arg(db_path)
        .args(args)
        .env_remove("GIGBOOK_DB")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_demo_prints_results() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("gigs.db");

    let out = stdout(&run(&db_path, &["demo"]));

    assert!(out.contains("Band for Concert 1: The Rolling Stones"));
    assert!(out.contains("Venue for Concert 1: Madison Square Garden"));
    assert!(out.contains("Hometown Show: false"));
    assert!(out.contains(
        "Introduction: Hello Cairo!!!!! We are The Rolling Stones and we're from London"
    ));
    assert!(out.contains(
        "Concert on Date: Hello Cairo!!!!! We are The Rolling Stones and we're from London"
    ));
    assert!(
        out.contains("Most Frequent Band at Stadium Cairo: The Rolling Stones")
            || out.contains("Most Frequent Band at Stadium Cairo: Metallica")
    );
    assert!(out.contains(
        "All Introductions for Band 1: [\"Hello New York!!!!! We are The Rolling Stones and we're from London\", \"Hello Cairo!!!!! We are The Rolling Stones and we're from London\"]\n"
    ));
    assert!(out.contains("Band with Most Performances: The Rolling Stones"));
}

#[test]
fn test_cli_add_schedule_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("gigs.db");

    stdout(&run(&db_path, &["band", "add", "X", "Cairo"]));
    stdout(&run(&db_path, &["venue", "add", "Y", "Cairo"]));
    let scheduled = stdout(&run(
        &db_path,
        &["schedule", "1", "Y", "2025-04-01", "--time", "20:00"],
    ));
    assert!(scheduled.contains("Concert 1 scheduled"));

    let show = stdout(&run(&db_path, &["concert", "show", "1"]));
    assert!(show.contains("Hometown Show: true"));
    assert!(show.contains("Introduction: Hello Cairo!!!!! We are X and we're from Cairo"));

    // The rows written through the CLI are visible to a direct connection
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM concerts", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_cli_schedule_unknown_venue_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("gigs.db");

    stdout(&run(&db_path, &["band", "add", "X", "Cairo"]));
    let out = stdout(&run(&db_path, &["schedule", "1", "Nowhere", "2025-04-01"]));

    assert!(out.contains("Venue 'Nowhere' not found."));
}

#[test]
fn test_cli_unknown_band_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("gigs.db");

    let output = run(&db_path, &["band", "concerts", "42"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_NOT_FOUND"), "stderr: {}", stderr);
}

#[test]
fn test_cli_json_list() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("gigs.db");

    stdout(&run(&db_path, &["band", "add", "Metallica", "Los Angeles"]));
    let out = stdout(&run(&db_path, &["--json", "band", "list"]));

    let bands: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(bands[0]["name"], "Metallica");
    assert_eq!(bands[0]["hometown"], "Los Angeles");
}
