//! Domain models for the club tracker
//!
//! Contains the entity types and their field validation without any I/O concerns.

mod fields;
mod member;
mod event;
mod task;
mod attendance;
mod budget;

pub use fields::{Amount, Email, FieldError, Phone, StudentNumber, Tag, Year};
pub use member::Member;
pub use event::{Event, EventId};
pub use task::Task;
pub use attendance::Attendance;
pub use budget::Budget;
