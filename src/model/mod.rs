//! # In-Memory Model
//!
//! The versioned, uniqueness-enforcing store behind every command.
//!
//! ## Layers
//!
//! | Type | Role |
//! |------|------|
//! | [`UniqueList`] | Ordered list, one element per identity |
//! | [`IdentityPolicy`] / [`Entity`] | Per-kind identity and exact equality |
//! | [`ClubData`] | One list per entity kind plus the optional budget |
//! | [`VersionedClubData`] | Undo/redo stacks of full [`ClubData`] copies |
//! | [`ModelManager`] | Session facade with per-kind filtered views |
//!
//! Command handlers call [`ModelManager`]; it delegates down the table.
//! Everything here is single-threaded and does no I/O.
//!
//! ## Commit Protocol
//!
//! ```text
//! manager.commit();                 // snapshot the state *before* the change
//! if let Err(e) = manager.add_member(m) {
//!     manager.rollback_last_commit()?;  // the change never happened
//!     return Err(e.into());
//! }
//! ```

mod identity;
mod unique;
mod club_data;
mod versioned;
mod filters;
mod manager;

pub use identity::{Entity, EntityKind, IdentityPolicy, ModelError};
pub use unique::UniqueList;
pub use club_data::ClubData;
pub use versioned::VersionedClubData;
pub use filters::Filter;
pub use manager::{BudgetSummary, ModelManager};
