#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.env_remove("CLUB_SITE_CONTENT");
    cmd.write_stdin(script.to_string()).assert()
}

#[test]
fn cli_lists_workshops() {
    run_cli("workshops\nquit\n")
        .success()
        .stdout(str_contains("workshop-1"))
        .stdout(str_contains("2025-09-19"))
        .stdout(str_contains("6 event(s)"));
}

#[test]
fn cli_reports_invalid_dates() {
    run_cli("on 19-09-2025\nquit\n")
        .success()
        .stdout(str_contains("Invalid date (YYYY-MM-DD)"));
}

#[test]
fn cli_shows_single_event() {
    run_cli("event thanksgiving-2025\nevent missing\nquit\n")
        .success()
        .stdout(str_contains("second Monday of October"))
        .stdout(str_contains("No event with id 'missing'."));
}

#[test]
fn cli_classifies_content() {
    run_cli("classify {\"nodeType\":\"document\",\"content\":[]}\nclassify hello\ntext 42\nquit\n")
        .success()
        .stdout(str_contains("rich document"))
        .stdout(str_contains("not a rich document"))
        .stdout(str_contains("42"));
}

#[test]
fn cli_exports_json() {
    let tmp = NamedTempFile::new().expect("create temp file");
    let path = tmp.path().to_string_lossy().to_string();
    run_cli(&format!("export json {}\nquit\n", path))
        .success()
        .stdout(str_contains("Calendar exported to"));
    let events = club_site::load_events_from_json(tmp.path()).expect("exported calendar");
    assert_eq!(events.len(), club_site::club_calendar().len());
}

#[test]
fn cli_content_requires_configuration() {
    run_cli("content blogPost\nquit\n")
        .success()
        .stdout(str_contains("No content export configured"));
}
