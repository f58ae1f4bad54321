//! Bibliographic registry configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    /// E-utilities base URL. Default: NCBI.
    pub base_url: Option<String>,
    /// Database queried. Default: "pubmed".
    pub database: Option<String>,
    /// Per-lookup timeout in seconds. Default: 10.
    pub timeout_secs: Option<u64>,
    /// Lookup cache capacity; 0 disables caching. Default: 0.
    pub cache_capacity: Option<u64>,
}

impl RegistryConfig {
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_REGISTRY_BASE_URL)
    }

    pub fn effective_database(&self) -> &str {
        self.database
            .as_deref()
            .unwrap_or(defaults::DEFAULT_REGISTRY_DATABASE)
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .unwrap_or(defaults::DEFAULT_REGISTRY_TIMEOUT_SECS),
        )
    }

    pub fn effective_cache_capacity(&self) -> u64 {
        self.cache_capacity
            .unwrap_or(defaults::DEFAULT_REGISTRY_CACHE_CAPACITY)
    }
}
