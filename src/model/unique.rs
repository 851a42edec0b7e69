//! Ordered list that refuses two elements with the same identity
//!
//! Insertion order is kept and is the display order. Every failing call
//! leaves the list exactly as it was.

use std::fmt;

use super::identity::{Entity, IdentityPolicy, ModelError};

/// An ordered collection enforcing identity uniqueness
#[derive(Clone)]
pub struct UniqueList<T> {
    items: Vec<T>,
    policy: IdentityPolicy<T>,
}

impl<T: Entity> UniqueList<T> {
    /// Creates an empty list using the kind's default policy
    pub fn new() -> Self {
        Self::with_policy(T::policy())
    }
}

impl<T: Entity> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> UniqueList<T> {
    /// Creates an empty list with an injected policy
    pub fn with_policy(policy: IdentityPolicy<T>) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    /// Returns the policy this list enforces
    pub fn policy(&self) -> &IdentityPolicy<T> {
        &self.policy
    }

    /// Returns true if an element with the same identity as `probe` is stored
    pub fn contains(&self, probe: &T) -> bool {
        self.position(probe).is_some()
    }

    /// Returns the stored element sharing `probe`'s identity
    pub fn find(&self, probe: &T) -> Option<&T> {
        self.position(probe).map(|idx| &self.items[idx])
    }

    /// Appends `item`
    ///
    /// Fails with [`ModelError::Duplicate`] if its identity is already present.
    pub fn add(&mut self, item: T) -> Result<(), ModelError> {
        if self.contains(&item) {
            return Err(ModelError::Duplicate(self.policy.kind));
        }
        self.items.push(item);
        Ok(())
    }

    /// Substitutes `edited` for the element with `target`'s identity, in place
    ///
    /// `edited` may keep `target`'s identity or take a new one, but it may not
    /// collide with any other stored element.
    pub fn replace(&mut self, target: &T, edited: T) -> Result<(), ModelError> {
        let idx = self
            .position(target)
            .ok_or(ModelError::NotFound(self.policy.kind))?;

        let same = self.policy.same_identity;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, other)| i != idx && same(other, &edited) && !same(other, target));
        if collides {
            return Err(ModelError::Duplicate(self.policy.kind));
        }

        self.items[idx] = edited;
        Ok(())
    }

    /// Removes the element that is exactly equal to `item`
    ///
    /// Sharing identity is not enough: an element that differs in any field
    /// is left alone and the call fails with [`ModelError::NotFound`].
    pub fn remove(&mut self, item: &T) -> Result<T, ModelError> {
        let exact = self.policy.exact;
        let idx = self
            .items
            .iter()
            .position(|e| exact(e, item))
            .ok_or(ModelError::NotFound(self.policy.kind))?;
        Ok(self.items.remove(idx))
    }

    /// Replaces the whole contents with `items`
    ///
    /// Fails with [`ModelError::Duplicate`] if any two of `items` share an
    /// identity. The pairwise check is quadratic, which is fine for club-sized
    /// lists but would need an index for many thousands of entries.
    pub fn replace_all(&mut self, items: Vec<T>) -> Result<(), ModelError> {
        if !self.all_unique(&items) {
            return Err(ModelError::Duplicate(self.policy.kind));
        }
        self.items = items;
        Ok(())
    }

    /// Returns an independent copy of the contents, in order
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, probe: &T) -> Option<usize> {
        let same = self.policy.same_identity;
        self.items.iter().position(|e| same(e, probe))
    }

    fn all_unique(&self, items: &[T]) -> bool {
        let same = self.policy.same_identity;
        items
            .iter()
            .enumerate()
            .all(|(i, a)| items[i + 1..].iter().all(|b| !same(a, b)))
    }
}

impl<T: PartialEq> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.policy.kind == other.policy.kind && self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueList")
            .field("kind", &self.policy.kind)
            .field("items", &self.items)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
