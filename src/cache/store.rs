// src/cache/store.rs

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tracing::debug;

use crate::features::FeatureTable;

/// Derived tables memoised per query key for the life of the process.
#[derive(Default)]
pub struct FeatureStore {
    map: RwLock<HashMap<String, Arc<FeatureTable>>>,
}

impl FeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Arc<FeatureTable>> {
        let map = self.map.read().unwrap_or_else(|e| e.into_inner());
        map.get(key).cloned()
    }

    pub fn insert(&self, key: &str, table: FeatureTable) -> Arc<FeatureTable> {
        let table = Arc::new(table);
        let mut map = self.map.write().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), Arc::clone(&table));
        table
    }

    /// Return the cached table or build, cache and return a new one.
    /// Building happens under the write lock so concurrent callers build once.
    pub fn get_or_try_insert_with<F, E>(&self, key: &str, build: F) -> Result<Arc<FeatureTable>, E>
    where
        F: FnOnce() -> Result<FeatureTable, E>,
    {
        if let Some(hit) = self.get(key) {
            debug!(key, "feature store hit");
            return Ok(hit);
        }

        let mut map = self.map.write().unwrap_or_else(|e| e.into_inner());
        if let Some(hit) = map.get(key) {
            return Ok(Arc::clone(hit));
        }
        let table = Arc::new(build()?);
        map.insert(key.to_string(), Arc::clone(&table));
        debug!(key, rows = table.len(), "feature store filled");
        Ok(table)
    }

    pub fn invalidate(&self, key: &str) -> bool {
        let mut map = self.map.write().unwrap_or_else(|e| e.into_inner());
        map.remove(key).is_some()
    }
}
