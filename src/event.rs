// ABOUTME: The Event record extracted from a day page, and the MonthDay query value.
// ABOUTME: Events are immutable (date, description) pairs with structural equality.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A historical event extracted from a day page.
///
/// The month and day of `date` always match the query that produced the
/// event; only the year varies between entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub description: String,
}

impl Event {
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: description.into(),
        }
    }

    /// The year of the event in astronomical numbering (1 BC is year 0).
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \u{2013} {}",
            self.date.format("%Y-%m-%d"),
            self.description
        )
    }
}

/// A month-of-year / day-of-month pair, independent of any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Create a MonthDay, returning None if the fields are out of range
    /// (month 1-12, day 1-31). Whether the day exists in a given year is
    /// left to date construction.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        ((1..=12).contains(&month) && (1..=31).contains(&day)).then_some(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}
