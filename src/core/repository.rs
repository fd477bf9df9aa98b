//! Generic in-memory repository
//!
//! This module provides the `Repository` struct used for both the fleet and the
//! customer roster. It keeps entities in insertion order and finds them by ID.
//!
//! # Uniqueness
//!
//! `add` is unconditional. The repository is only the storage mechanism; the
//! workflow engine checks `find_by_id` before adding and reports duplicate IDs
//! itself, so the same repository works for string and numeric identifiers.

use crate::core::traits::Identifiable;

/// Ordered collection of entities keyed by their identifier
#[derive(Debug, Clone)]
pub struct Repository<T> {
    /// Entities in insertion order
    items: Vec<T>,
}

impl<T: Identifiable> Repository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Repository { items: Vec::new() }
    }

    /// Append an entity without checking its ID
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the entity with the given ID
    ///
    /// # Returns
    ///
    /// * `Some(T)` - The removed entity
    /// * `None` - If no entity has that ID
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(position))
    }

    /// Get an immutable reference to the first entity with the given ID
    pub fn find_by_id(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Get a mutable reference to the first entity with the given ID
    pub fn find_by_id_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// All entities in insertion order
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Identifiable> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}
