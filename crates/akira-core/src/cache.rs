//! Memo of generated code samples
//!
//! Samples are keyed by endpoint id and dialect. The cache is bounded and
//! evicts the least recently used sample; `EditSync` clears it whenever a new
//! document is committed.
//!
//! Copyright (c) 2025 AkiraDocs Team
//! Licensed under the Apache-2.0 license

use crate::codegen::Dialect;
use std::collections::HashMap;
use std::sync::Arc;

/// Key of a cached sample
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleKey {
    pub endpoint_id: String,
    pub dialect: Dialect,
}

impl SampleKey {
    pub fn new(endpoint_id: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            endpoint_id: endpoint_id.into(),
            dialect,
        }
    }
}

/// Configuration for cache behavior
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum cache size (number of samples)
    pub max_entries: usize,
    /// Whether to enable cache
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 256,
            enabled: true,
        }
    }
}

/// Bounded LRU cache of generated samples
#[derive(Debug)]
pub struct SampleCache {
    entries: HashMap<SampleKey, Arc<str>>,
    config: CacheConfig,
    access_order: Vec<SampleKey>, // For LRU eviction
    hits: u64,
    misses: u64,
}

impl SampleCache {
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
            access_order: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Get a cached sample
    pub fn get(&mut self, key: &SampleKey) -> Option<Arc<str>> {
        if !self.config.enabled {
            return None;
        }

        match self.entries.get(key).cloned() {
            Some(sample) => {
                self.hits += 1;
                self.update_access_order(key);
                Some(sample)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Cache a sample
    pub fn put(&mut self, key: SampleKey, sample: Arc<str>) {
        if !self.config.enabled || self.config.max_entries == 0 {
            return;
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.config.max_entries {
            self.evict_lru();
        }

        self.update_access_order(&key);
        self.entries.insert(key, sample);
    }

    /// Return the cached sample or compute, store and return it
    pub fn get_or_insert_with<F>(&mut self, key: SampleKey, generate: F) -> Arc<str>
    where
        F: FnOnce() -> String,
    {
        if let Some(sample) = self.get(&key) {
            return sample;
        }

        let sample: Arc<str> = Arc::from(generate());
        self.put(key, Arc::clone(&sample));
        sample
    }

    pub fn contains(&self, key: &SampleKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all cache entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.access_order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            max_entries: self.config.max_entries,
            hits: self.hits,
            misses: self.misses,
            enabled: self.config.enabled,
        }
    }

    fn evict_lru(&mut self) {
        if let Some(oldest) = self.access_order.first().cloned() {
            self.entries.remove(&oldest);
            self.access_order.retain(|k| k != &oldest);
        }
    }

    fn update_access_order(&mut self, key: &SampleKey) {
        self.access_order.retain(|k| k != key);
        self.access_order.push(key.clone());
    }
}

impl Default for SampleCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring and debugging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub max_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub enabled: bool,
}

impl CacheStats {
    /// Cache utilization as a percentage
    pub fn utilization(&self) -> f64 {
        if self.max_entries == 0 {
            0.0
        } else {
            (self.total_entries as f64 / self.max_entries as f64) * 100.0
        }
    }

    /// Hit rate as a percentage of all lookups
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            (self.hits as f64 / lookups as f64) * 100.0
        }
    }
}
