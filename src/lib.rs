pub mod calendar;
pub mod config;
pub mod content;
pub mod event;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod intake;
pub mod persistence;

pub use calendar::{CalendarBuilder, EventCalendar, club_calendar};
pub use config::Settings;
pub use content::{
    ContentEntry, ContentType, ContentValue, Rendering, RichDocument, as_rich_document, classify,
    to_plain_text,
};
pub use event::{CalendarEvent, EventType};
pub use intake::{
    Acknowledgment, CsvSubmissionSink, FormSubmission, IntakeError, MemorySubmissionSink,
    SubmissionSink,
};
pub use persistence::{
    PersistenceError, load_events_from_csv, load_events_from_json, save_events_to_csv,
    save_events_to_json,
};
