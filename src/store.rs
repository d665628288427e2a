//! In-memory list cache
//!
//! Each list screen keeps the last fetched page in memory and patches it
//! optimistically after a successful remote call. Contract: a mutation is
//! applied only from a call's success branch; a failed call must leave the
//! cached rows exactly as they were.

use crate::models::{Simulation, Task, TaskQuestion};

/// Entities addressable by their backend id
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for Simulation {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Task {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for TaskQuestion {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Ordered collection of fetched rows, keyed by entity id
#[derive(Debug, Clone, Default)]
pub struct ListStore<T: Keyed> {
    items: Vec<T>,
}

impl<T: Keyed> ListStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replace the whole collection with a freshly fetched page
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    /// Patch the row with the given id in place; false when absent
    pub fn update(&mut self, id: i64, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.key() == id) {
            Some(item) => {
                patch(item);
                true
            }
            None => false,
        }
    }

    /// Splice the row with the given id out of the collection
    pub fn remove(&mut self, id: i64) -> Option<T> {
        let index = self.items.iter().position(|item| item.key() == id)?;
        Some(self.items.remove(index))
    }
}
