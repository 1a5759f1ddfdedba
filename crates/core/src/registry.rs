//! Per-cycle registry of drinks already rendered.
//!
//! Both fetch paths (by-name, and the by-id lookups spawned from ingredient
//! matches) can return the same drink; the registry is the single source of
//! truth for whether a name has already gone to the renderer this cycle.

use std::collections::HashSet;

/// Set of drink names rendered during the current search cycle.
#[derive(Debug, Default)]
pub struct DrinkRegistry {
    names: HashSet<String>,
}

impl DrinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` has already been rendered this cycle.
    pub fn exists(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Mark `name` as rendered. Returns false if it was already present.
    pub fn register(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    /// Drop all entries. Called at the start of every search cycle.
    pub fn reset(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
