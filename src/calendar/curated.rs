//! Hand-authored calendar data.
//!
//! Every date here is a literal (year, month, day) triple. Holidays are taken
//! from the Ontario statutory rules for each year rather than computed.

use chrono::Weekday;

use super::generators::{Holiday, MakeupDay, RecurringSeries, SingleDay, Span};
use crate::event::EventType;

pub const WORKSHOP_SERIES: RecurringSeries = RecurringSeries {
    key: "workshop",
    title: "Technology Workshop",
    description: "Weekly hands-on session covering a new tool or technique. Bring a laptop; no experience needed.",
    anchor: (2025, 9, 16),
    weekday: Weekday::Fri,
    count: 6,
};

pub const CLUB_EVENTS: &[SingleDay] = &[
    SingleDay {
        key: "clubs-fair-2025",
        title: "Clubs Fair",
        date: (2025, 9, 10),
        event_type: EventType::Club,
        description: Some("Meet the executive team at our booth and sign up for the mailing list."),
    },
    SingleDay {
        key: "welcome-social-2025",
        title: "Welcome Social",
        date: (2025, 9, 26),
        event_type: EventType::Club,
        description: Some("Pizza and board games for new and returning members."),
    },
    SingleDay {
        key: "fall-tournament-2025",
        title: "Fall Coding Tournament",
        date: (2025, 11, 15),
        event_type: EventType::Club,
        description: Some("Team programming contest, prizes for the top three teams."),
    },
    SingleDay {
        key: "hackathon-2026",
        title: "Spring Hackathon",
        date: (2026, 3, 7),
        event_type: EventType::Club,
        description: Some("Twelve-hour build day open to all students."),
    },
    SingleDay {
        key: "year-end-banquet-2026",
        title: "Year-End Banquet",
        date: (2026, 3, 27),
        event_type: EventType::Club,
        description: None,
    },
];

pub const TERM_MARKERS: &[SingleDay] = &[
    SingleDay {
        key: "fall-2025-classes-begin",
        title: "Fall Term Classes Begin",
        date: (2025, 9, 3),
        event_type: EventType::School,
        description: None,
    },
    SingleDay {
        key: "fall-2025-classes-end",
        title: "Fall Term Classes End",
        date: (2025, 12, 5),
        event_type: EventType::School,
        description: None,
    },
    SingleDay {
        key: "winter-2026-classes-begin",
        title: "Winter Term Classes Begin",
        date: (2026, 1, 5),
        event_type: EventType::School,
        description: None,
    },
    SingleDay {
        key: "winter-2026-classes-end",
        title: "Winter Term Classes End",
        date: (2026, 4, 8),
        event_type: EventType::School,
        description: None,
    },
    SingleDay {
        key: "fall-2026-classes-begin",
        title: "Fall Term Classes Begin",
        date: (2026, 9, 9),
        event_type: EventType::School,
        description: None,
    },
    SingleDay {
        key: "fall-2026-classes-end",
        title: "Fall Term Classes End",
        date: (2026, 12, 4),
        event_type: EventType::School,
        description: None,
    },
    SingleDay {
        key: "winter-2027-classes-begin",
        title: "Winter Term Classes Begin",
        date: (2027, 1, 4),
        event_type: EventType::School,
        description: None,
    },
    SingleDay {
        key: "winter-2027-classes-end",
        title: "Winter Term Classes End",
        date: (2027, 4, 7),
        event_type: EventType::School,
        description: None,
    },
];

pub const SPANS: &[Span] = &[
    Span {
        key: "fall-reading-week-2025",
        title: "Reading Week",
        start: (2025, 10, 25),
        days: 7,
        event_type: EventType::School,
        description: Some("No classes. The fall workshop series has wrapped up."),
    },
    Span {
        key: "fall-exams-2025",
        title: "Exam Period",
        start: (2025, 12, 8),
        days: 14,
        event_type: EventType::School,
        description: Some("Final examinations for fall term courses."),
    },
    Span {
        key: "winter-break-2025",
        title: "Winter Break",
        start: (2025, 12, 22),
        days: 14,
        event_type: EventType::Holiday,
        description: Some("University closed."),
    },
    Span {
        key: "winter-reading-week-2026",
        title: "Reading Week",
        start: (2026, 2, 14),
        days: 9,
        event_type: EventType::School,
        description: Some("No classes."),
    },
    Span {
        key: "winter-exams-2026",
        title: "Exam Period",
        start: (2026, 4, 9),
        days: 17,
        event_type: EventType::School,
        description: Some("Final examinations for winter term courses."),
    },
    Span {
        key: "fall-reading-week-2026",
        title: "Reading Week",
        start: (2026, 10, 24),
        days: 7,
        event_type: EventType::School,
        description: Some("No classes."),
    },
    Span {
        key: "fall-exams-2026",
        title: "Exam Period",
        start: (2026, 12, 7),
        days: 14,
        event_type: EventType::School,
        description: Some("Final examinations for fall term courses."),
    },
];

pub const HOLIDAYS: &[Holiday] = &[
    Holiday { key: "labour-day-2025", name: "Labour Day", date: (2025, 9, 1), rule: "first Monday of September" },
    Holiday { key: "thanksgiving-2025", name: "Thanksgiving", date: (2025, 10, 13), rule: "second Monday of October" },
    Holiday { key: "christmas-2025", name: "Christmas Day", date: (2025, 12, 25), rule: "December 25" },
    Holiday { key: "new-years-2026", name: "New Year's Day", date: (2026, 1, 1), rule: "January 1" },
    Holiday { key: "family-day-2026", name: "Family Day", date: (2026, 2, 16), rule: "third Monday of February" },
    Holiday { key: "good-friday-2026", name: "Good Friday", date: (2026, 4, 3), rule: "Friday before Easter Sunday" },
    Holiday { key: "victoria-day-2026", name: "Victoria Day", date: (2026, 5, 18), rule: "last Monday before May 25" },
    Holiday { key: "canada-day-2026", name: "Canada Day", date: (2026, 7, 1), rule: "July 1" },
    Holiday { key: "labour-day-2026", name: "Labour Day", date: (2026, 9, 7), rule: "first Monday of September" },
    Holiday { key: "thanksgiving-2026", name: "Thanksgiving", date: (2026, 10, 12), rule: "second Monday of October" },
    Holiday { key: "christmas-2026", name: "Christmas Day", date: (2026, 12, 25), rule: "December 25" },
    Holiday { key: "new-years-2027", name: "New Year's Day", date: (2027, 1, 1), rule: "January 1" },
    Holiday { key: "family-day-2027", name: "Family Day", date: (2027, 2, 15), rule: "third Monday of February" },
    Holiday { key: "good-friday-2027", name: "Good Friday", date: (2027, 3, 26), rule: "Friday before Easter Sunday" },
    Holiday { key: "victoria-day-2027", name: "Victoria Day", date: (2027, 5, 24), rule: "last Monday before May 25" },
    Holiday { key: "labour-day-2027", name: "Labour Day", date: (2027, 9, 6), rule: "first Monday of September" },
    Holiday { key: "thanksgiving-2027", name: "Thanksgiving", date: (2027, 10, 11), rule: "second Monday of October" },
];

pub const MAKEUP_DAYS: &[MakeupDay] = &[
    MakeupDay { key: "makeup-thanksgiving-2025", date: (2025, 12, 3), compensates: "thanksgiving-2025", classes_of: Weekday::Mon },
    MakeupDay { key: "makeup-good-friday-2026", date: (2026, 4, 8), compensates: "good-friday-2026", classes_of: Weekday::Fri },
    MakeupDay { key: "makeup-thanksgiving-2026", date: (2026, 12, 2), compensates: "thanksgiving-2026", classes_of: Weekday::Mon },
];

pub fn holiday(key: &str) -> Option<&'static Holiday> {
    HOLIDAYS.iter().find(|h| h.key == key)
}
