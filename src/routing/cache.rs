//! Verdict cache
//!
//! Memoizes [`authorize`] per identity, normalized path and tree version. An
//! identity whose resolver cannot be fingerprinted is never cached, so a stale
//! verdict cannot survive a change of grants.

use super::guard::{AuthorizationVerdict, authorize};
use super::matcher::normalize_path;
use super::tree::RouteTree;
use crate::auth::{Identity, IdentityKey};
use crate::utils::error::{AccessError, Result};
use lru::LruCache;
use parking_lot::RwLock;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VerdictKey {
    /// `None` for an anonymous visitor
    identity: Option<IdentityKey>,
    path: String,
    tree_version: u64,
}

#[derive(Debug, Default)]
struct AtomicVerdictStats {
    hits: AtomicU64,
    misses: AtomicU64,
    bypassed: AtomicU64,
    evictions: AtomicU64,
}

/// Cache statistics snapshot
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictCacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Lookups skipped because the identity had no cache key
    pub bypassed: u64,
    pub evictions: u64,
    pub entries: usize,
}

/// LRU cache of authorization verdicts
pub struct VerdictCache {
    entries: RwLock<LruCache<VerdictKey, AuthorizationVerdict>>,
    stats: AtomicVerdictStats,
}

impl VerdictCache {
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or_else(|| {
            AccessError::config("Invalid cache configuration: max_entries must be greater than 0")
        })?;
        info!("Verdict cache enabled with {} entries", capacity);

        Ok(Self {
            entries: RwLock::new(LruCache::new(capacity)),
            stats: AtomicVerdictStats::default(),
        })
    }

    /// Cached equivalent of [`authorize`]
    pub fn authorize(
        &self,
        tree: &RouteTree,
        current_path: &str,
        identity: Option<&Identity>,
    ) -> AuthorizationVerdict {
        let identity_key = match identity {
            Some(identity) => match identity.cache_key() {
                Some(key) => Some(key),
                None => {
                    self.stats.bypassed.fetch_add(1, Ordering::Relaxed);
                    return authorize(tree.nodes(), current_path, Some(identity));
                }
            },
            None => None,
        };

        let key = VerdictKey {
            identity: identity_key,
            path: normalize_path(current_path),
            tree_version: tree.version(),
        };

        if let Some(verdict) = self.entries.write().get(&key) {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Verdict cache hit for path: {}", key.path);
            return verdict.clone();
        }
        self.stats.misses.fetch_add(1, Ordering::Relaxed);

        let verdict = authorize(tree.nodes(), current_path, identity);
        let evicted = self.entries.write().push(key.clone(), verdict.clone());
        if evicted.is_some_and(|(old, _)| old != key) {
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
        }
        verdict
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> VerdictCacheStats {
        VerdictCacheStats {
            hits: self.stats.hits.load(Ordering::Relaxed),
            misses: self.stats.misses.load(Ordering::Relaxed),
            bypassed: self.stats.bypassed.load(Ordering::Relaxed),
            evictions: self.stats.evictions.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// Drop every entry and reset statistics
    pub fn clear(&self) {
        self.entries.write().clear();
        self.stats.hits.store(0, Ordering::Relaxed);
        self.stats.misses.store(0, Ordering::Relaxed);
        self.stats.bypassed.store(0, Ordering::Relaxed);
        self.stats.evictions.store(0, Ordering::Relaxed);
        debug!("Verdict cache cleared");
    }
}

impl std::fmt::Debug for VerdictCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerdictCache")
            .field("stats", &self.stats())
            .finish()
    }
}
