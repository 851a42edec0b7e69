//! Event domain model
//!
//! Events are identified by their id, compared exactly (case-sensitive).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fields::{non_blank, Amount, FieldError};

/// Event identifier chosen by the user (e.g. `FOC2024`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventId(String);

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EventId {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            Err(FieldError::InvalidEventId(s.to_string()))
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl TryFrom<String> for EventId {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EventId> for String {
    fn from(id: EventId) -> Self {
        id.0
    }
}

/// A club event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    /// Identity key
    pub id: EventId,

    pub date: NaiveDate,

    pub description: String,

    /// Money spent on the event
    pub expense: Amount,
}

/// Unchecked form read from disk
#[derive(Deserialize)]
struct EventRecord {
    id: EventId,
    date: NaiveDate,
    description: String,
    #[serde(default)]
    expense: Amount,
}

impl TryFrom<EventRecord> for Event {
    type Error = FieldError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        Event::new(record.id, record.date, &record.description, record.expense)
    }
}

impl Event {
    pub fn new(
        id: EventId,
        date: NaiveDate,
        description: &str,
        expense: Amount,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            id,
            date,
            description: non_blank("Description", description)?,
            expense,
        })
    }

    /// Returns true if this event and `other` share an id
    pub fn is_same_event(&self, other: &Event) -> bool {
        self.id == other.id
    }

    /// Returns true if the event falls within `[start, end]`
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}
