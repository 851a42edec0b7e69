//! Attendance domain model
//!
//! An attendance record ties a member name to an event id by value. The pair
//! is the record's identity; the attended flag is not part of it.

use serde::{Deserialize, Serialize};

use super::event::EventId;
use super::fields::{non_blank, FieldError};

/// Whether a member attended an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AttendanceRecord")]
pub struct Attendance {
    pub event_id: EventId,

    pub member_name: String,

    pub attended: bool,
}

/// Unchecked form read from disk
#[derive(Deserialize)]
struct AttendanceRecord {
    event_id: EventId,
    member_name: String,
    #[serde(default)]
    attended: bool,
}

impl TryFrom<AttendanceRecord> for Attendance {
    type Error = FieldError;

    fn try_from(record: AttendanceRecord) -> Result<Self, Self::Error> {
        Attendance::new(record.event_id, &record.member_name, record.attended)
    }
}

impl Attendance {
    pub fn new(event_id: EventId, member_name: &str, attended: bool) -> Result<Self, FieldError> {
        Ok(Self {
            event_id,
            member_name: non_blank("Member name", member_name)?,
            attended,
        })
    }

    /// Returns a copy with the attended flag set to `attended`
    pub fn with_attended(&self, attended: bool) -> Self {
        Self {
            attended,
            ..self.clone()
        }
    }

    /// Returns true if both records are for the same event and member name
    pub fn is_same_record(&self, other: &Attendance) -> bool {
        self.event_id == other.event_id && self.member_name == other.member_name
    }

    pub fn is_for_event(&self, event_id: &EventId) -> bool {
        &self.event_id == event_id
    }
}
