//! Undo/redo over whole-store snapshots
//!
//! [`VersionedClubData`] keeps the live [`ClubData`] plus two stacks of full
//! copies. Callers must [`commit`](VersionedClubData::commit) *before* the
//! mutation they want to be able to undo: the commit records the store as it
//! is at that moment. Committing after the mutation records the new state,
//! and undoing it then changes nothing.
//!
//! Both stacks are unbounded and every entry is a complete copy, so memory
//! grows with the number of commits times the size of the store. Commit,
//! undo and redo each cost one full copy.

use std::ops::{Deref, DerefMut};

use super::club_data::ClubData;
use super::identity::ModelError;

/// A [`ClubData`] with snapshot-based history
#[derive(Debug, Clone, Default)]
pub struct VersionedClubData {
    current: ClubData,
    undo_history: Vec<ClubData>,
    redo_history: Vec<ClubData>,
}

impl VersionedClubData {
    /// Starts with an empty store and no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a copy of `initial` with no history
    pub fn from_data(initial: &ClubData) -> Self {
        Self {
            current: initial.clone(),
            undo_history: Vec::new(),
            redo_history: Vec::new(),
        }
    }

    /// Records the current state on the undo stack and forgets any redo states
    pub fn commit(&mut self) {
        self.undo_history.push(self.current.clone());
        self.redo_history.clear();
        log::debug!(
            "commit: undo depth {}, redo cleared",
            self.undo_history.len()
        );
    }

    /// Restores the most recently committed state
    ///
    /// Returns false, leaving everything untouched, if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_history.pop() else {
            log::trace!("undo: history empty");
            return false;
        };
        self.redo_history.push(self.current.clone());
        self.current.reset_data(&previous);
        log::debug!(
            "undo: undo depth {}, redo depth {}",
            self.undo_history.len(),
            self.redo_history.len()
        );
        true
    }

    /// Re-applies the most recently undone state
    ///
    /// Returns false, leaving everything untouched, if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_history.pop() else {
            log::trace!("redo: history empty");
            return false;
        };
        self.undo_history.push(self.current.clone());
        self.current.reset_data(&next);
        log::debug!(
            "redo: undo depth {}, redo depth {}",
            self.undo_history.len(),
            self.redo_history.len()
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_history.is_empty()
    }

    /// Discards the latest commit without restoring it
    ///
    /// Used when a command committed and then failed before finishing its
    /// mutation, so the recorded state equals the current one.
    pub fn rollback_last_commit(&mut self) -> Result<(), ModelError> {
        self.undo_history
            .pop()
            .ok_or(ModelError::NothingToRollback)?;
        log::debug!(
            "rollback: discarded last commit, undo depth {}",
            self.undo_history.len()
        );
        Ok(())
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_history.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_history.len()
    }

    /// Returns the live store
    pub fn data(&self) -> &ClubData {
        &self.current
    }

    /// Returns the live store for mutation
    pub fn data_mut(&mut self) -> &mut ClubData {
        &mut self.current
    }
}

impl Deref for VersionedClubData {
    type Target = ClubData;

    fn deref(&self) -> &ClubData {
        &self.current
    }
}

impl DerefMut for VersionedClubData {
    fn deref_mut(&mut self) -> &mut ClubData {
        &mut self.current
    }
}
