use chrono::{TimeZone, Utc};
use club_site::{CsvSubmissionSink, FormSubmission, IntakeError, SubmissionSink};
use std::fs;
use tempfile::tempdir;

fn submission(name: &str) -> FormSubmission {
    FormSubmission {
        timestamp: Utc.with_ymd_and_hms(2025, 9, 12, 14, 30, 0).unwrap(),
        name: name.to_string(),
        email: format!("{}@example.org", name.to_lowercase()),
        phone: "555-0100".to_string(),
        program: "Computer Science".to_string(),
        year: "2".to_string(),
        why_join: "Meet people, build projects".to_string(),
        how_heard: "Clubs Fair".to_string(),
    }
}

#[test]
fn csv_sink_writes_header_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("submissions.csv");
    let mut sink = CsvSubmissionSink::new(&path);

    assert!(sink.append(&submission("Sam")).unwrap().is_success());
    assert!(sink.append(&submission("Alex")).unwrap().is_success());

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "timestamp,name,email,phone,program,year,whyJoin,howHeard"
    );
    assert_eq!(
        lines[1],
        "2025-09-12T14:30:00+00:00,Sam,sam@example.org,555-0100,Computer Science,2,\"Meet people, build projects\",Clubs Fair"
    );
    assert!(lines[2].contains(",Alex,alex@example.org,"));
}

#[test]
fn csv_sink_appends_to_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("submissions.csv");
    CsvSubmissionSink::new(&path).append(&submission("Sam")).unwrap();
    CsvSubmissionSink::new(&path).append(&submission("Alex")).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.matches("timestamp,name").count(), 1);
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn invalid_submission_is_not_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("submissions.csv");
    let mut sink = CsvSubmissionSink::new(&path);
    let mut bad = submission("Sam");
    bad.email = String::new();
    assert!(matches!(sink.append(&bad), Err(IntakeError::Invalid(_))));
    assert!(!path.exists());
}

#[test]
fn unwritable_path_is_an_io_error() {
    let dir = tempdir().unwrap();
    let mut sink = CsvSubmissionSink::new(dir.path().join("missing").join("submissions.csv"));
    assert!(matches!(sink.append(&submission("Sam")), Err(IntakeError::Io(_))));
}
