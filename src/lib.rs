//! Clubroll - A local-first tracker for student club administration
//!
//! Clubroll keeps a club's members, events, attendance, tasks and budget in
//! one JSON file. Every change goes through a versioned in-memory model that
//! enforces per-kind uniqueness and supports undo/redo.

pub mod domain;
pub mod model;
pub mod storage;
pub mod cli;

pub use domain::{Attendance, Budget, Event, EventId, Member, Task};
pub use model::{ClubData, ModelError, ModelManager, UniqueList, VersionedClubData};
