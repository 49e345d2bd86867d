// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time-bounded read cache.
//!
//! Entries are keyed by operation name plus the JSON encoding of the
//! operation's arguments. Any mutation of the store clears the cache as a
//! whole; there is no per-entry invalidation.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use simcha_config::model::CacheConfig;
use simcha_core::{Provider, Service};
use tracing::{debug, warn};

use crate::export::LegacyExport;
use crate::stats::CatalogStats;

/// Identifies one cached read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: &'static str,
    args: String,
}

impl CacheKey {
    /// Key for an operation without arguments.
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            args: String::new(),
        }
    }

    /// Key for an operation whose arguments are part of the identity.
    ///
    /// Returns `None` if the arguments cannot be encoded; the caller then
    /// skips the cache for this read.
    pub fn with_args<T: Serialize + ?Sized>(operation: &'static str, args: &T) -> Option<Self> {
        match serde_json::to_string(args) {
            Ok(args) => Some(Self { operation, args }),
            Err(e) => {
                warn!(operation, error = %e, "cache key encoding failed, bypassing cache");
                None
            }
        }
    }
}

/// A cached read result.
#[derive(Debug, Clone)]
pub enum CachedValue {
    Providers(Vec<Provider>),
    Services(Vec<Service>),
    Export(LegacyExport),
    Stats(CatalogStats),
}

/// Conversion between a read result and its cached form.
pub trait Cacheable: Clone {
    fn into_cached(self) -> CachedValue;
    fn from_cached(value: &CachedValue) -> Option<Self>;
}

impl Cacheable for Vec<Provider> {
    fn into_cached(self) -> CachedValue {
        CachedValue::Providers(self)
    }

    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Providers(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl Cacheable for Vec<Service> {
    fn into_cached(self) -> CachedValue {
        CachedValue::Services(self)
    }

    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Services(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl Cacheable for LegacyExport {
    fn into_cached(self) -> CachedValue {
        CachedValue::Export(self)
    }

    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Export(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl Cacheable for CatalogStats {
    fn into_cached(self) -> CachedValue {
        CachedValue::Stats(self)
    }

    fn from_cached(value: &CachedValue) -> Option<Self> {
        match value {
            CachedValue::Stats(v) => Some(v.clone()),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    value: CachedValue,
    expires_at: DateTime<Utc>,
}

/// Counters describing cache behaviour since construction or the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries currently held (fresh or not yet evicted).
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Read-through cache with a fixed time-to-live.
#[derive(Debug)]
pub struct ReadCache {
    entries: HashMap<CacheKey, CacheEntry>,
    ttl: TimeDelta,
    enabled: bool,
    hits: u64,
    misses: u64,
}

impl ReadCache {
    pub fn new(config: &CacheConfig) -> Self {
        let ttl = i64::try_from(config.ttl_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        Self {
            entries: HashMap::new(),
            ttl,
            enabled: config.enabled,
            hits: 0,
            misses: 0,
        }
    }

    /// Fresh value for `key` at `now`. Expired entries are evicted.
    pub fn get(&mut self, key: &CacheKey, now: DateTime<Utc>) -> Option<&CachedValue> {
        if !self.enabled {
            self.misses += 1;
            return None;
        }

        let fresh = match self.entries.get(key) {
            Some(entry) => now < entry.expires_at,
            None => false,
        };
        if !fresh {
            if self.entries.remove(key).is_some() {
                debug!(operation = key.operation, "cache entry expired");
            }
            self.misses += 1;
            debug!(operation = key.operation, "cache miss");
            return None;
        }

        self.hits += 1;
        debug!(operation = key.operation, "cache hit");
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Store `value` under `key`, valid for one TTL from `now`.
    pub fn insert(&mut self, key: CacheKey, value: CachedValue, now: DateTime<Utc>) {
        if !self.enabled {
            return;
        }
        let expires_at = now
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.entries.insert(key, CacheEntry { value, expires_at });
    }

    /// Drop every entry. Hit and miss counters are kept.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        debug!(dropped, "cache cleared");
    }

    /// Drop every entry and zero the counters.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
