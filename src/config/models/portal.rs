//! Top-level portal configuration

#![allow(missing_docs)]

use super::*;
use crate::routing::RouteNode;
use serde::{Deserialize, Serialize};

/// Main portal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// Breadcrumb configuration
    #[serde(default)]
    pub breadcrumbs: BreadcrumbConfig,
    /// Role catalog configuration
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Verdict cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Route tree
    #[serde(default)]
    pub routes: Vec<RouteNode>,
}

impl PortalConfig {
    /// Merge two configurations, with other taking precedence
    ///
    /// A non-empty route tree in `other` replaces the whole tree; trees are not
    /// merged node by node.
    pub fn merge(mut self, other: Self) -> Self {
        self.breadcrumbs = self.breadcrumbs.merge(other.breadcrumbs);
        self.rbac = self.rbac.merge(other.rbac);
        self.cache = self.cache.merge(other.cache);
        self.logging = self.logging.merge(other.logging);
        if !other.routes.is_empty() {
            self.routes = other.routes;
        }
        self
    }
}
