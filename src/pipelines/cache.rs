//! Process-wide cache for artifact-backed models.
//!
//! Artifacts load once per process and are treated as immutable afterwards:
//! building a second pipeline over the same artifacts reuses the already
//! loaded model instead of touching the filesystem again.

use crate::error::Result;
use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Mutex;

/// Implemented by model option types to produce a stable cache key.
pub trait ModelOptions {
    /// Stable identifier for the artifacts a set of options loads.
    fn cache_key(&self) -> String;
}

/// Thread-safe map from `(model type, key)` to a loaded model instance.
pub struct ModelCache {
    entries: Mutex<HashMap<(TypeId, String), Box<dyn Any + Send + Sync>>>,
}

impl ModelCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached model for `key`, loading it with `loader` on first
    /// use.
    pub fn get_or_create<M, F>(&self, key: &str, loader: F) -> Result<M>
    where
        M: Clone + Send + Sync + 'static,
        F: FnOnce() -> Result<M>,
    {
        let cache_key = (TypeId::of::<M>(), key.to_owned());

        {
            let entries = self.entries.lock().unwrap();
            if let Some(entry) = entries.get(&cache_key) {
                if let Some(model) = entry.downcast_ref::<M>() {
                    return Ok(model.clone());
                }
            }
        }

        let model = loader()?;

        let mut entries = self.entries.lock().unwrap();
        entries.insert(cache_key, Box::new(model.clone()));
        Ok(model)
    }

    /// Drop every cached model.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Number of cached models.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_MODEL_CACHE: Lazy<ModelCache> = Lazy::new(ModelCache::new);

/// The process-wide cache used by pipeline builders.
pub fn global_cache() -> &'static ModelCache {
    &GLOBAL_MODEL_CACHE
}
