use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::event::{CalendarEvent, EventType};

/// Earliest date on or after `anchor` that falls on `weekday`.
pub fn first_weekday_on_or_after(anchor: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut date = anchor;
    while date.weekday() != weekday {
        date = date + Duration::days(1);
    }
    date
}

/// `count` dates spaced a week apart, starting at the first `weekday` on or after `anchor`.
pub fn weekly_series(anchor: NaiveDate, weekday: Weekday, count: usize) -> Vec<NaiveDate> {
    let first = first_weekday_on_or_after(anchor, weekday);
    (0..count)
        .map(|week| first + Duration::weeks(week as i64))
        .collect()
}

/// Consecutive days `start`, `start + 1`, ... covering `days` calendar days.
pub fn span_dates(start: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days)
        .map(|offset| start + Duration::days(i64::from(offset)))
        .collect()
}

/// Template for a recurring weekly club series.
#[derive(Debug, Clone, Copy)]
pub struct RecurringSeries {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub anchor: (i32, u32, u32),
    pub weekday: Weekday,
    pub count: usize,
}

impl RecurringSeries {
    pub fn events(&self) -> Vec<CalendarEvent> {
        let anchor = ymd(self.anchor);
        weekly_series(anchor, self.weekday, self.count)
            .into_iter()
            .enumerate()
            .map(|(idx, date)| {
                CalendarEvent::new(
                    format!("{}-{}", self.key, idx + 1),
                    self.title,
                    date,
                    EventType::Club,
                )
                .with_description(self.description)
            })
            .collect()
    }
}

/// A hand-authored event occupying one calendar day.
#[derive(Debug, Clone, Copy)]
pub struct SingleDay {
    pub key: &'static str,
    pub title: &'static str,
    pub date: (i32, u32, u32),
    pub event_type: EventType,
    pub description: Option<&'static str>,
}

impl SingleDay {
    pub fn event(&self) -> CalendarEvent {
        let event = CalendarEvent::new(self.key, self.title, ymd(self.date), self.event_type);
        match self.description {
            Some(text) => event.with_description(text),
            None => event,
        }
    }
}

/// A hand-authored event covering `days` consecutive calendar days.
#[derive(Debug, Clone, Copy)]
pub struct Span {
    pub key: &'static str,
    pub title: &'static str,
    pub start: (i32, u32, u32),
    pub days: u32,
    pub event_type: EventType,
    pub description: Option<&'static str>,
}

impl Span {
    pub fn start_date(&self) -> NaiveDate {
        ymd(self.start)
    }

    /// One event per day of the span; ids are suffixed `-1` through `-days`.
    pub fn expand(&self) -> Vec<CalendarEvent> {
        span_dates(self.start_date(), self.days)
            .into_iter()
            .enumerate()
            .map(|(idx, date)| {
                let event = CalendarEvent::new(
                    format!("{}-{}", self.key, idx + 1),
                    self.title,
                    date,
                    self.event_type,
                );
                match self.description {
                    Some(text) => event.with_description(text),
                    None => event,
                }
            })
            .collect()
    }
}

/// A statutory holiday, entered by hand for a specific year.
#[derive(Debug, Clone, Copy)]
pub struct Holiday {
    pub key: &'static str,
    pub name: &'static str,
    pub date: (i32, u32, u32),
    /// Human-readable rule the date was taken from, e.g. "second Monday of October".
    pub rule: &'static str,
}

impl Holiday {
    pub fn event(&self) -> CalendarEvent {
        CalendarEvent::new(self.key, self.name, ymd(self.date), EventType::Holiday)
            .with_description(self.rule)
    }
}

/// A day on which classes missed for a holiday are held instead.
#[derive(Debug, Clone, Copy)]
pub struct MakeupDay {
    pub key: &'static str,
    pub date: (i32, u32, u32),
    /// Key of the [`Holiday`] this day compensates for.
    pub compensates: &'static str,
    pub classes_of: Weekday,
}

impl MakeupDay {
    pub fn event(&self, holiday: Option<&Holiday>) -> CalendarEvent {
        let description = match holiday {
            Some(h) => format!(
                "{} classes are held today in place of {} ({})",
                weekday_name(self.classes_of),
                h.name,
                ymd(h.date).format("%B %-d, %Y"),
            ),
            None => format!("{} classes are held today", weekday_name(self.classes_of)),
        };
        CalendarEvent::new(self.key, "Make-up Class Day", ymd(self.date), EventType::School)
            .with_description(description)
    }
}

// Literal tables only ever carry valid triples.
pub(crate) fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid calendar literal {year}-{month}-{day}"))
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
