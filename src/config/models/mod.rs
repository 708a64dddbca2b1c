//! Configuration data models
//!
//! This module defines all configuration structures used by the access engine.

#![allow(missing_docs)]

pub mod auth;
pub mod cache;
pub mod logging;
pub mod navigation;
pub mod portal;

// Re-export all configuration types
pub use auth::*;
pub use cache::*;
pub use logging::*;
pub use navigation::*;
pub use portal::*;

use crate::auth::{Role, Tier};

/// Default label of the synthetic home breadcrumb
pub fn default_home_label() -> String {
    "Home".to_string()
}

/// Default icon of the synthetic home breadcrumb
pub fn default_home_icon() -> Option<String> {
    Some("home".to_string())
}

pub fn default_true() -> bool {
    true
}

/// Default verdict cache capacity
pub fn default_cache_max_entries() -> usize {
    1024
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_role() -> Role {
    Role::Member
}

pub fn default_tier() -> Tier {
    Tier::Regular
}
