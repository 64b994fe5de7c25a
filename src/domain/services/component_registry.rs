//! Symbolic component keys resolved to views on first use.
//!
//! The menu configuration only names views (`componentKey`). A registry maps
//! each key to a loader; the loader runs on the first resolution and its
//! result is cached for every later navigation.

use once_cell::unsync::OnceCell;
use std::collections::HashMap;

use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_component_resolved;

/// Resolves a component key to a renderable view
pub trait ComponentResolver<V> {
    fn resolve(&self, key: &str) -> Result<V>;
}

struct LazyEntry<V> {
    loader: fn() -> V,
    loaded: OnceCell<V>,
}

pub struct ComponentRegistry<V> {
    entries: HashMap<String, LazyEntry<V>>,
}

impl<V> Default for ComponentRegistry<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V: Clone> ComponentRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the loader for `key`
    pub fn register(&mut self, key: impl Into<String>, loader: fn() -> V) -> &mut Self {
        self.entries.insert(
            key.into(),
            LazyEntry {
                loader,
                loaded: OnceCell::new(),
            },
        );
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_loaded(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.loaded.get().is_some())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<V: Clone> ComponentResolver<V> for ComponentRegistry<V> {
    fn resolve(&self, key: &str) -> Result<V> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| AppError::UnknownComponent(key.to_string()))?;

        let first_load = entry.loaded.get().is_none();
        let view = entry.loaded.get_or_init(entry.loader).clone();
        log_component_resolved(key, first_load);
        Ok(view)
    }
}
