use super::{PersistenceError, PersistenceResult};
use crate::event::{CalendarEvent, EventType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub fn save_events_to_json<P: AsRef<Path>>(
    events: &[CalendarEvent],
    path: P,
) -> PersistenceResult<()> {
    super::validate_events(events)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, events)?;
    Ok(())
}

pub fn load_events_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<CalendarEvent>> {
    let file = File::open(path)?;
    let events: Vec<CalendarEvent> = serde_json::from_reader(file)?;
    super::validate_events(&events)?;
    Ok(events)
}

#[derive(Default, Serialize, Deserialize)]
struct EventCsvRecord {
    id: String,
    title: String,
    date: String,
    #[serde(rename = "type")]
    event_type: String,
    description: String,
}

impl From<&CalendarEvent> for EventCsvRecord {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            date: format_date(event.date),
            event_type: event.event_type.as_str().to_string(),
            description: event.description.clone().unwrap_or_default(),
        }
    }
}

impl EventCsvRecord {
    fn into_event(self) -> PersistenceResult<CalendarEvent> {
        let date = parse_date(&self.date)?;
        let event_type = self
            .event_type
            .parse::<EventType>()
            .map_err(|err| PersistenceError::InvalidData(err.to_string()))?;
        Ok(CalendarEvent {
            id: self.id,
            title: self.title,
            date,
            event_type,
            description: parse_string_option(self.description),
        })
    }
}

pub fn save_events_to_csv<P: AsRef<Path>>(
    events: &[CalendarEvent],
    path: P,
) -> PersistenceResult<()> {
    super::validate_events(events)?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for event in events {
        writer.serialize(EventCsvRecord::from(event))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_events_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<CalendarEvent>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut events = Vec::new();
    for record in reader.deserialize::<EventCsvRecord>() {
        let record = record?;
        events.push(record.into_event()?);
    }
    super::validate_events(&events)?;
    Ok(events)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(input: &str) -> PersistenceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| PersistenceError::InvalidData(format!("invalid date '{input}': {e}")))
}

fn parse_string_option(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
