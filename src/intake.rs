//! Join-us form submissions and the append-only stores that receive them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub program: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub why_join: String,
    #[serde(default)]
    pub how_heard: String,
}

impl FormSubmission {
    /// Column order of the tabular store.
    pub const FIELDS: [&'static str; 8] = [
        "timestamp",
        "name",
        "email",
        "phone",
        "program",
        "year",
        "whyJoin",
        "howHeard",
    ];

    pub fn validate(&self) -> IntakeResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("program", &self.program),
        ] {
            if value.trim().is_empty() {
                return Err(IntakeError::Invalid(format!("{field} is required")));
            }
        }
        if !self.email.contains('@') {
            return Err(IntakeError::Invalid(format!(
                "'{}' is not an email address",
                self.email
            )));
        }
        Ok(())
    }

    fn row(&self) -> [String; 8] {
        [
            self.timestamp.to_rfc3339(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.program.clone(),
            self.year.clone(),
            self.why_join.clone(),
            self.how_heard.clone(),
        ]
    }
}

/// Reply handed back to the form after an append attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Acknowledgment {
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            result: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

#[derive(Debug)]
pub enum IntakeError {
    Invalid(String),
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::Invalid(msg) => write!(f, "invalid submission: {msg}"),
            IntakeError::Io(err) => write!(f, "io error: {err}"),
            IntakeError::Csv(err) => write!(f, "csv error: {err}"),
        }
    }
}

impl std::error::Error for IntakeError {}

impl From<io::Error> for IntakeError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type IntakeResult<T> = Result<T, IntakeError>;

/// Append-only destination for submissions. No retries.
pub trait SubmissionSink {
    fn append(&mut self, submission: &FormSubmission) -> IntakeResult<Acknowledgment>;
}

/// Appends one CSV row per submission, writing the header when the file is new.
#[derive(Debug, Clone)]
pub struct CsvSubmissionSink {
    path: PathBuf,
}

impl CsvSubmissionSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SubmissionSink for CsvSubmissionSink {
    fn append(&mut self, submission: &FormSubmission) -> IntakeResult<Acknowledgment> {
        submission.validate()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;
        let mut writer = csv::Writer::from_writer(file);
        if needs_header {
            writer.write_record(FormSubmission::FIELDS)?;
        }
        writer.write_record(submission.row())?;
        writer.flush()?;
        log::info!("recorded submission from {}", submission.email);
        Ok(Acknowledgment::success())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemorySubmissionSink {
    submissions: Vec<FormSubmission>,
}

impl MemorySubmissionSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> &[FormSubmission] {
        &self.submissions
    }
}

impl SubmissionSink for MemorySubmissionSink {
    fn append(&mut self, submission: &FormSubmission) -> IntakeResult<Acknowledgment> {
        submission.validate()?;
        self.submissions.push(submission.clone());
        Ok(Acknowledgment::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> FormSubmission {
        serde_json::from_str(
            r#"{"timestamp":"2025-09-12T14:30:00Z","name":"Sam Lee","email":"sam@example.org",
                "phone":"","program":"Computer Science","year":"2","whyJoin":"Learn Rust",
                "howHeard":"Clubs Fair"}"#,
        )
        .unwrap()
    }

    #[test]
    fn payload_uses_camel_case_fields() {
        let value = serde_json::to_value(submission()).unwrap();
        assert_eq!(value["whyJoin"], "Learn Rust");
        assert_eq!(value["howHeard"], "Clubs Fair");
    }

    #[test]
    fn missing_timestamp_defaults_to_now() {
        let before = Utc::now();
        let sub: FormSubmission = serde_json::from_str(
            r#"{"name":"A","email":"a@b.c","program":"Math"}"#,
        )
        .unwrap();
        assert!(sub.timestamp >= before);
        assert!(sub.why_join.is_empty());
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut sub = submission();
        sub.program = "  ".to_string();
        assert!(matches!(sub.validate(), Err(IntakeError::Invalid(msg)) if msg.contains("program")));
    }

    #[test]
    fn email_must_contain_at_sign() {
        let mut sub = submission();
        sub.email = "sam.example.org".to_string();
        assert!(sub.validate().is_err());
    }

    #[test]
    fn memory_sink_keeps_order() {
        let mut sink = MemorySubmissionSink::new();
        let first = submission();
        let mut second = submission();
        second.name = "Alex".to_string();
        assert!(sink.append(&first).unwrap().is_success());
        assert!(sink.append(&second).unwrap().is_success());
        assert_eq!(sink.submissions()[1].name, "Alex");
    }
}
