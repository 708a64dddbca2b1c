//! Access engine
//!
//! Bundles a validated route tree, the role catalog and breadcrumb options
//! behind one handle built from [`Config`].

use crate::auth::{Identity, Permission, RbacSystem, Role, Tier};
use crate::config::Config;
use crate::routing::{
    AuthorizationVerdict, BreadcrumbItem, BreadcrumbOptions, RouteMatch, RouteNode, RouteTree,
    VerdictCache, authorize, breadcrumbs, filter_tree, resolve,
};
use crate::utils::error::Result;
use std::collections::BTreeSet;
use tracing::{info, warn};

#[derive(Debug)]
pub struct AccessEngine {
    tree: RouteTree,
    rbac: RbacSystem,
    breadcrumb_options: BreadcrumbOptions,
    cache: Option<VerdictCache>,
}

impl AccessEngine {
    pub fn new(tree: RouteTree, rbac: RbacSystem, breadcrumb_options: BreadcrumbOptions) -> Self {
        Self {
            tree,
            rbac,
            breadcrumb_options,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: VerdictCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the engine from a validated configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        info!("Initializing access engine");

        let tree = RouteTree::new(config.routes().to_vec())?;
        let rbac = RbacSystem::new(config.rbac())?;
        let mut engine = Self::new(tree, rbac, config.breadcrumbs().to_options());

        if config.cache().enabled {
            engine = engine.with_cache(VerdictCache::new(config.cache().max_entries)?);
        }

        for permission in engine.unreachable_permissions() {
            warn!(
                "Route permission '{}' is not granted by any role",
                permission
            );
        }

        info!(
            "Access engine ready: {} routes, {} roles",
            engine.tree.len(),
            engine.rbac.list_roles().len()
        );
        Ok(engine)
    }

    pub fn tree(&self) -> &RouteTree {
        &self.tree
    }

    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }

    pub fn breadcrumb_options(&self) -> &BreadcrumbOptions {
        &self.breadcrumb_options
    }

    pub fn cache(&self) -> Option<&VerdictCache> {
        self.cache.as_ref()
    }

    /// Identity backed by the role catalog
    pub fn identity(&self, subject: Option<&str>, role: Role, tier: Tier) -> Identity {
        self.rbac.identity(subject, role, tier)
    }

    /// Identity for the configured default role and tier
    pub fn default_identity(&self, subject: Option<&str>) -> Identity {
        let config = self.rbac.config();
        self.identity(subject, config.default_role, config.default_tier)
    }

    pub fn navigation(&self, identity: Option<&Identity>) -> Vec<RouteNode> {
        filter_tree(self.tree.nodes(), identity)
    }

    pub fn authorize(&self, current_path: &str, identity: Option<&Identity>) -> AuthorizationVerdict {
        match &self.cache {
            Some(cache) => cache.authorize(&self.tree, current_path, identity),
            None => authorize(self.tree.nodes(), current_path, identity),
        }
    }

    pub fn breadcrumbs(&self, current_path: &str) -> Vec<BreadcrumbItem> {
        breadcrumbs(self.tree.nodes(), current_path, &self.breadcrumb_options)
    }

    pub fn resolve(&self, current_path: &str) -> Option<RouteMatch<'_>> {
        resolve(self.tree.nodes(), current_path)
    }

    /// Permissions required somewhere in the tree that no role holds
    pub fn unreachable_permissions(&self) -> Vec<Permission> {
        let required: BTreeSet<&Permission> = self
            .tree
            .iter()
            .flat_map(|node| node.requirements.required_permissions.iter())
            .collect();
        required
            .into_iter()
            .filter(|permission| !self.rbac.grants_anywhere(permission))
            .cloned()
            .collect()
    }
}
