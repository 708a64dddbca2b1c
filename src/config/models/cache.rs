//! Verdict cache configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Verdict cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable verdict caching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum cached verdicts
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_cache_max_entries(),
        }
    }
}

impl CacheConfig {
    /// Merge cache configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.max_entries != default_cache_max_entries() {
            self.max_entries = other.max_entries;
        }
        self
    }
}
