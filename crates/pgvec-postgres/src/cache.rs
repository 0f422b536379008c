//! Per-database memo of resolved OIDs
//!
//! OIDs differ between database instances, so entries are keyed by the
//! connection string as well as the extension and type names. The cache
//! is owned by the caller; nothing here is global.

use crate::resolver::OidResolver;
use dashmap::DashMap;
use pgvec_core::{ResolverConfig, Result, TypeOid};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    database_url: String,
    extension_name: String,
    type_name: String,
}

impl CacheKey {
    fn from_config(config: &ResolverConfig) -> Self {
        Self {
            database_url: config.database_url.clone(),
            extension_name: config.extension_name.clone(),
            type_name: config.type_name.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct OidCache {
    entries: DashMap<CacheKey, TypeOid>,
}

impl OidCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, config: &ResolverConfig) -> Option<TypeOid> {
        self.entries
            .get(&CacheKey::from_config(config))
            .map(|entry| *entry.value())
    }

    /// Record an OID obtained some other way.
    pub fn insert(&self, config: &ResolverConfig, oid: TypeOid) {
        self.entries.insert(CacheKey::from_config(config), oid);
    }

    /// Return the cached OID, resolving and caching it on a miss.
    ///
    /// Failures are not cached. Concurrent misses for the same key may
    /// each run the lookup; the results are identical.
    pub async fn get_or_resolve(&self, config: &ResolverConfig) -> Result<TypeOid> {
        if let Some(oid) = self.get(config) {
            return Ok(oid);
        }

        let oid = OidResolver::new(config.clone())?.resolve().await?;
        self.insert(config, oid);
        Ok(oid)
    }

    /// Drop every entry for `database_url`, e.g. after the extension was
    /// reinstalled or the URL now points at another instance.
    pub fn invalidate(&self, database_url: &str) {
        self.entries
            .retain(|key, _| key.database_url != database_url);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
