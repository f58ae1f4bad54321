//! Memoizing registry decorator using moka.

use std::time::Duration;

use moka::sync::Cache;
use veritas_core::errors::RegistryError;
use veritas_core::models::RegistryRecord;
use veritas_core::traits::IBibliographicRegistry;
use veritas_observability::tracing_setup::events;

/// Entries live at most this long.
const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Caches successful lookups, including "not found" answers, in front of
/// another registry. Failed lookups are not cached.
pub struct CachedRegistry<R> {
    inner: R,
    cache: Cache<String, Option<RegistryRecord>>,
}

impl<R: IBibliographicRegistry> CachedRegistry<R> {
    pub fn new(inner: R, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(CACHE_TTL)
            .build();
        Self { inner, cache }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: IBibliographicRegistry> IBibliographicRegistry for CachedRegistry<R> {
    fn fetch(&self, identifier: &str) -> Result<Option<RegistryRecord>, RegistryError> {
        if let Some(hit) = self.cache.get(identifier) {
            events::registry_cache_hit(identifier);
            return Ok(hit);
        }
        let fetched = self.inner.fetch(identifier)?;
        self.cache.insert(identifier.to_string(), fetched.clone());
        Ok(fetched)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
