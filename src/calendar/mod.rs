pub mod curated;
pub mod generators;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};

use crate::event::{CalendarEvent, EventType};
use generators::{Holiday, MakeupDay, RecurringSeries, SingleDay, Span};

static CLUB_CALENDAR: Lazy<EventCalendar> = Lazy::new(EventCalendar::club_default);

/// The process-wide calendar, built on first access.
pub fn club_calendar() -> &'static EventCalendar {
    &CLUB_CALENDAR
}

/// Immutable, insertion-ordered collection of calendar events.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCalendar {
    events: Vec<CalendarEvent>,
}

impl Default for EventCalendar {
    fn default() -> Self {
        Self::club_default()
    }
}

impl EventCalendar {
    /// Workshops first, then club events, term markers, spans, holidays and make-up days.
    pub fn club_default() -> Self {
        CalendarBuilder::new()
            .recurring(&curated::WORKSHOP_SERIES)
            .single_days(curated::CLUB_EVENTS)
            .single_days(curated::TERM_MARKERS)
            .spans(curated::SPANS)
            .holidays(curated::HOLIDAYS)
            .makeup_days(curated::MAKEUP_DAYS)
            .build()
    }

    pub fn from_events(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events sorted by date, ties broken by id.
    pub fn chronological(&self) -> Vec<&CalendarEvent> {
        let mut sorted: Vec<&CalendarEvent> = self.events.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        sorted
    }

    pub fn of_type(&self, event_type: EventType) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|event| event.event_type == event_type)
            .collect()
    }

    pub fn on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|event| event.is_on(date)).collect()
    }

    /// Inclusive on both ends; reversed bounds are swapped.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&CalendarEvent> {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.chronological()
            .into_iter()
            .filter(|event| event.date >= start && event.date <= end)
            .collect()
    }

    pub fn upcoming(&self, from: NaiveDate, limit: usize) -> Vec<&CalendarEvent> {
        self.chronological()
            .into_iter()
            .filter(|event| event.date >= from)
            .take(limit)
            .collect()
    }

    /// Chronological events grouped by (year, month).
    pub fn by_month(&self) -> BTreeMap<(i32, u32), Vec<&CalendarEvent>> {
        let mut months: BTreeMap<(i32, u32), Vec<&CalendarEvent>> = BTreeMap::new();
        for event in self.chronological() {
            months
                .entry((event.date.year(), event.date.month()))
                .or_default()
                .push(event);
        }
        months
    }
}

/// Assembles a calendar from independently generated sub-sequences.
#[derive(Debug, Default)]
pub struct CalendarBuilder {
    events: Vec<CalendarEvent>,
    holidays: Vec<Holiday>,
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recurring(mut self, series: &RecurringSeries) -> Self {
        self.events.extend(series.events());
        self
    }

    pub fn single_days(mut self, days: &[SingleDay]) -> Self {
        self.events.extend(days.iter().map(SingleDay::event));
        self
    }

    pub fn spans(mut self, spans: &[Span]) -> Self {
        for span in spans {
            self.events.extend(span.expand());
        }
        self
    }

    pub fn holidays(mut self, holidays: &[Holiday]) -> Self {
        self.events.extend(holidays.iter().map(Holiday::event));
        self.holidays.extend_from_slice(holidays);
        self
    }

    /// Make-up days look up the holiday they compensate for among holidays added so far.
    pub fn makeup_days(mut self, days: &[MakeupDay]) -> Self {
        for day in days {
            let holiday = self.holidays.iter().find(|h| h.key == day.compensates);
            if holiday.is_none() {
                log::warn!(
                    "make-up day {} references unknown holiday {}",
                    day.key,
                    day.compensates
                );
            }
            self.events.push(day.event(holiday));
        }
        self
    }

    pub fn build(self) -> EventCalendar {
        let mut seen = HashSet::with_capacity(self.events.len());
        for event in &self.events {
            if !seen.insert(event.id.as_str()) {
                log::warn!("duplicate calendar event id {}", event.id);
            }
        }
        log::debug!("built calendar with {} events", self.events.len());
        EventCalendar::from_events(self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_insertion_order_of_groups() {
        let calendar = CalendarBuilder::new()
            .single_days(curated::TERM_MARKERS)
            .recurring(&curated::WORKSHOP_SERIES)
            .build();
        assert_eq!(calendar.events()[0].id, "fall-2025-classes-begin");
        assert_eq!(
            calendar.events()[curated::TERM_MARKERS.len()].id,
            "workshop-1"
        );
    }

    #[test]
    fn default_calendar_starts_with_workshops() {
        let calendar = EventCalendar::club_default();
        let ids: Vec<&str> = calendar.events()[..6].iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["workshop-1", "workshop-2", "workshop-3", "workshop-4", "workshop-5", "workshop-6"]
        );
    }

    #[test]
    fn global_calendar_is_shared() {
        assert!(std::ptr::eq(club_calendar(), club_calendar()));
        assert_eq!(club_calendar(), &EventCalendar::club_default());
    }
}
