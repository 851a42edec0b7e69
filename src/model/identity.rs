//! Identity policies for the stored entity kinds
//!
//! Each kind distinguishes two notions of equality:
//!
//! | Kind | Identity | Exact |
//! |------|----------|-------|
//! | [`Member`] | student number, case-insensitive | all fields |
//! | [`Event`] | event id | all fields |
//! | [`Task`] | title | all fields |
//! | [`Attendance`] | (event id, member name) | all fields, including the attended flag |
//!
//! Identity decides uniqueness and which element `replace` targets.
//! Exact equality decides what `remove` deletes.

use std::fmt;
use thiserror::Error;

use crate::domain::{Attendance, Event, Member, Task};

/// The kinds of entity kept in a [`ClubData`](super::ClubData)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Member,
    Event,
    Task,
    Attendance,
}

impl EntityKind {
    /// Returns a lowercase display label
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Member => "member",
            EntityKind::Event => "event",
            EntityKind::Task => "task",
            EntityKind::Attendance => "attendance record",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Duplicate {0}: an entry with the same identity already exists")]
    Duplicate(EntityKind),

    #[error("No matching {0} found")]
    NotFound(EntityKind),

    #[error("No commit to roll back")]
    NothingToRollback,
}

/// Equality strategy for one entity kind
///
/// Injected into [`UniqueList`](super::UniqueList) so the list never needs to
/// know what the stored type is.
pub struct IdentityPolicy<T> {
    /// Kind reported in errors
    pub kind: EntityKind,

    /// True if two values name the same entity
    pub same_identity: fn(&T, &T) -> bool,

    /// True if two values are equal in every field
    pub exact: fn(&T, &T) -> bool,
}

impl<T> Clone for IdentityPolicy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IdentityPolicy<T> {}

impl<T> fmt::Debug for IdentityPolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityPolicy")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> IdentityPolicy<T> {
    /// Builds a policy whose exact equality is the type's `PartialEq`
    pub fn new(kind: EntityKind, same_identity: fn(&T, &T) -> bool) -> Self {
        Self {
            kind,
            same_identity,
            exact: |a, b| a == b,
        }
    }
}

/// A value that can be stored in a [`UniqueList`](super::UniqueList)
pub trait Entity: Clone + PartialEq + fmt::Debug {
    /// The default identity policy for this kind
    fn policy() -> IdentityPolicy<Self>;
}

impl Entity for Member {
    fn policy() -> IdentityPolicy<Self> {
        IdentityPolicy::new(EntityKind::Member, Member::is_same_member)
    }
}

impl Entity for Event {
    fn policy() -> IdentityPolicy<Self> {
        IdentityPolicy::new(EntityKind::Event, Event::is_same_event)
    }
}

impl Entity for Task {
    fn policy() -> IdentityPolicy<Self> {
        IdentityPolicy::new(EntityKind::Task, Task::is_same_task)
    }
}

impl Entity for Attendance {
    fn policy() -> IdentityPolicy<Self> {
        IdentityPolicy::new(EntityKind::Attendance, Attendance::is_same_record)
    }
}
