// ABOUTME: Extraction of Event records from a parsed day page: locate the "Events" list and split entries.
// ABOUTME: Uses an explicit tree-walk (marker, enclosing heading, following siblings) instead of CSS combinators.

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use crate::event::Event;
use crate::year::normalize_year;

/// The spaced en-dash separating the year token from the description.
const ENTRY_DELIMITER: &str = " \u{2013} ";

/// A notice emitted when a list entry cannot be turned into an Event.
///
/// Skips never fail the extraction; the sink exists so callers can log or
/// count them without depending on log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// The entry text did not split into exactly a year and a description.
    MalformedEntry { text: String },
    /// The year token matched neither the plain nor the era-qualified form.
    MalformedYear { token: String },
    /// The normalized year does not form a valid date with the queried
    /// month/day (e.g. February 29 of a non-leap year).
    InvalidDate { year: i32 },
}

/// Extract events for (month, day) from a parsed day page.
///
/// Locates the list following the heading that carries the "Events" anchor
/// and converts its direct `<li>` children, in document order. Entries that
/// cannot be parsed are reported to `on_skip` and dropped. A page without
/// an "Events" section yields an empty Vec.
pub fn extract_events(
    doc: &Html,
    month: u32,
    day: u32,
    on_skip: &mut dyn FnMut(Skipped),
) -> Vec<Event> {
    let Some(list) = find_events_list(doc) else {
        return Vec::new();
    };

    let mut events = Vec::new();
    for item in list.children().filter_map(ElementRef::wrap) {
        if item.value().name() != "li" {
            continue;
        }
        let text = flattened_text(item);

        let parts: Vec<&str> = text.split(ENTRY_DELIMITER).collect();
        if parts.len() != 2 {
            on_skip(Skipped::MalformedEntry { text });
            continue;
        }

        let year = match normalize_year(parts[0].trim()) {
            Ok(year) => year,
            Err(err) => {
                on_skip(Skipped::MalformedYear { token: err.token });
                continue;
            }
        };

        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            on_skip(Skipped::InvalidDate { year });
            continue;
        };

        events.push(Event::new(date, parts[1].trim()));
    }
    events
}

/// Find the event list: the first list among the siblings following the
/// heading associated with the "Events" anchor.
fn find_events_list(doc: &Html) -> Option<ElementRef<'_>> {
    let marker_sel = Selector::parse("#Events").expect("valid selector");
    let marker = doc.select(&marker_sel).next()?;
    let heading = enclosing_heading(marker).unwrap_or(marker);

    if let Some(list) = list_after(heading) {
        return Some(list);
    }

    // Newer Wikipedia markup wraps the heading in a container div, with the
    // list as the wrapper's sibling. Retry one level up.
    let parent = heading.parent().and_then(ElementRef::wrap)?;
    if matches!(parent.value().name(), "body" | "html") {
        return None;
    }
    list_after(parent)
}

/// The nearest heading ancestor of `el`, or `el` itself if it is a heading.
fn enclosing_heading(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if is_heading(el.value().name()) {
        return Some(el);
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| is_heading(a.value().name()))
}

fn is_heading(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Walk forward through the element siblings of `start` until a list is
/// found. Another heading ends the walk: the section had no list.
fn list_after(start: ElementRef<'_>) -> Option<ElementRef<'_>> {
    for sibling in start.next_siblings().filter_map(ElementRef::wrap) {
        let name = sibling.value().name();
        if name == "ul" || name == "ol" {
            return Some(sibling);
        }
        if is_heading(name) {
            return None;
        }
    }
    None
}

/// Flattened text content of an element with runs of whitespace collapsed,
/// so markup line breaks cannot hide the entry delimiter.
fn flattened_text(el: ElementRef<'_>) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
