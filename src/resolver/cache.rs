//! Per-invocation cache of resolved parameter values.

use std::collections::HashMap;
use std::sync::RwLock;

/// Read-mostly map from parameter name to value.
///
/// Lookups take a shared lock, inserts take an exclusive one. Entries live
/// as long as the cache, so there is no eviction.
#[derive(Debug, Default)]
pub struct ParameterCache {
    entries: RwLock<HashMap<String, String>>,
}

impl ParameterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(|poison| poison.into_inner());
        entries.get(name).cloned()
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poison| poison.into_inner());
        entries.insert(name.into(), value.into());
    }

    /// Returns the cached value, or calls `fetch` and caches its result.
    ///
    /// Two threads missing on the same name at the same time may both fetch;
    /// the later insert wins. Failed fetches are not cached.
    pub fn get_or_try_insert_with<E>(
        &self,
        name: &str,
        fetch: impl FnOnce() -> Result<String, E>,
    ) -> Result<String, E> {
        if let Some(value) = self.get(name) {
            tracing::trace!(parameter = name, "parameter cache hit");
            return Ok(value);
        }

        let value = fetch()?;
        self.insert(name, value.clone());
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .len()
    }
}
