use chrono::NaiveDate;
use club_site::content::{ContentSource, JsonFileContentSource};
use club_site::{
    CalendarEvent, ContentType, ContentValue, EventType, Settings, classify, club_calendar,
    save_events_to_csv, save_events_to_json, to_plain_text,
};
use std::io::{self, Write};

const DEFAULT_UPCOMING: usize = 5;

fn render_events_as_text_table(events: &[&CalendarEvent]) -> String {
    let col_names = ["id", "date", "type", "title", "description"];
    let rows: Vec<[String; 5]> = events
        .iter()
        .map(|event| {
            [
                event.id.clone(),
                event.date.format("%Y-%m-%d").to_string(),
                event.event_type.to_string(),
                event.title.clone(),
                event.description.clone().unwrap_or_default(),
            ]
        })
        .collect();

    // Compute column widths
    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if len > widths[ci] {
                widths[ci] = len;
            }
        }
    }

    // Build horizontal separator
    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let push_row = |out: &mut String, cells: &[&str]| {
        out.push('|');
        for (ci, cell) in cells.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.chars().count());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &col_names[..]);
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_row(&mut out, &cells);
    }
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&format!("{} event(s)\n", events.len()));
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  events [holiday|school|club]       List events in date order\n  workshops                          List the weekly workshop series\n  on <YYYY-MM-DD>                    Events on a day\n  range <YYYY-MM-DD> <YYYY-MM-DD>    Events between two days (inclusive)\n  upcoming <YYYY-MM-DD> [n]          Next n events from a day (default 5)\n  event <id>                         Show a single event\n  export json|csv <path>             Write the calendar to a file\n  classify <json>                    Is the value a rich-text document?\n  text <json>                        Plain-text form of a CMS value\n  content <contentType>              List entries from the configured content export\n  quit|exit                          Exit"
    );
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_json_arg(rest: &str) -> Option<serde_json::Value> {
    if rest.is_empty() {
        return None;
    }
    // Bare words are treated as plain strings.
    Some(serde_json::from_str(rest).unwrap_or_else(|_| serde_json::Value::String(rest.to_string())))
}

fn main() {
    env_logger::init();
    let settings = Settings::from_env();
    let calendar = club_calendar();

    println!("Club Site (CLI) - type 'help' for commands\n");
    println!("{} events loaded.", calendar.len());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let rest = input[cmd.len()..].trim();

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "events" => match parts.next() {
                None => println!("{}", render_events_as_text_table(&calendar.chronological())),
                Some(raw) => match raw.parse::<EventType>() {
                    Ok(event_type) => {
                        let mut events = calendar.of_type(event_type);
                        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
                        println!("{}", render_events_as_text_table(&events));
                    }
                    Err(e) => println!("Error: {}", e),
                },
            },
            "workshops" => {
                let events: Vec<&CalendarEvent> = calendar
                    .events()
                    .iter()
                    .filter(|event| event.id.starts_with("workshop-"))
                    .collect();
                println!("{}", render_events_as_text_table(&events));
            }
            "on" => match parts.next().map(parse_date) {
                Some(Some(date)) => {
                    println!("{}", render_events_as_text_table(&calendar.on(date)));
                }
                Some(None) => println!("Invalid date (YYYY-MM-DD)"),
                None => println!("Usage: on <YYYY-MM-DD>"),
            },
            "range" => {
                let start_s = parts.next();
                let end_s = parts.next();
                match (start_s, end_s) {
                    (Some(start_s), Some(end_s)) => {
                        let (Some(start), Some(end)) = (parse_date(start_s), parse_date(end_s)) else {
                            println!("Invalid date (YYYY-MM-DD)");
                            continue;
                        };
                        println!("{}", render_events_as_text_table(&calendar.in_range(start, end)));
                    }
                    _ => println!("Usage: range <YYYY-MM-DD> <YYYY-MM-DD>"),
                }
            }
            "upcoming" => {
                let date_s = parts.next();
                let count_s = parts.next();
                match date_s {
                    Some(date_s) => {
                        let date = match parse_date(date_s) { Some(d) => d, None => { println!("Invalid date (YYYY-MM-DD)"); continue; } };
                        let count: usize = match count_s.map(str::parse::<usize>) {
                            None => DEFAULT_UPCOMING,
                            Some(Ok(n)) => n,
                            Some(Err(_)) => { println!("Invalid count"); continue; }
                        };
                        println!("{}", render_events_as_text_table(&calendar.upcoming(date, count)));
                    }
                    None => println!("Usage: upcoming <YYYY-MM-DD> [n]"),
                }
            }
            "event" => match parts.next() {
                Some(id) => match calendar.find(id) {
                    Some(event) => println!("{}", render_events_as_text_table(&[event])),
                    None => println!("No event with id '{}'.", id),
                },
                None => println!("Usage: event <id>"),
            },
            "export" => {
                let format = parts.next();
                let path = parts.next();
                match (format, path) {
                    (Some(format), Some(path)) => {
                        let res = match format {
                            "json" => save_events_to_json(calendar.events(), path),
                            "csv" => save_events_to_csv(calendar.events(), path),
                            _ => { println!("Unknown format '{}'. Use json or csv.", format); continue; }
                        };
                        match res {
                            Ok(()) => println!("Calendar exported to {}.", path),
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: export json|csv <path>"),
                }
            }
            "classify" => match parse_json_arg(rest) {
                Some(value) => {
                    if classify(&value) {
                        println!("rich document");
                    } else {
                        println!("not a rich document");
                    }
                }
                None => println!("Usage: classify <json>"),
            },
            "text" => match parse_json_arg(rest) {
                Some(value) => {
                    let content = ContentValue::from_json(value.clone());
                    if content.is_rich() {
                        println!("{}", content.display_text());
                    } else {
                        println!("{}", to_plain_text(&value));
                    }
                }
                None => println!("Usage: text <json>"),
            },
            "content" => {
                let Some(path) = settings.content_path.as_ref() else {
                    println!("No content export configured. Set CLUB_SITE_CONTENT.");
                    continue;
                };
                let content_type = match parts.next().map(str::parse::<ContentType>) {
                    Some(Ok(ct)) => ct,
                    Some(Err(e)) => { println!("Error: {}", e); continue; }
                    None => { println!("Usage: content <contentType>"); continue; }
                };
                match JsonFileContentSource::new(path).fetch_entries(content_type) {
                    Ok(entries) => {
                        for entry in &entries {
                            let headline = match content_type {
                                ContentType::Homepage => entry.field("heroTitle").display_text(),
                                ContentType::Partner | ContentType::Sponsor => entry.field("name").display_text(),
                                _ => entry.field("title").display_text(),
                            };
                            println!("  {}\t{}", entry.id, headline);
                        }
                        println!("{} {} entr(ies)", entries.len(), content_type);
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
