//! # portal-access
//!
//! Route access control and navigation derivation for a membership portal.
//!
//! Given a static route tree annotated with required roles, tiers and
//! permission tokens, and the signed-in user's identity, the crate decides
//! which menu entries are visible, whether the current path may be opened, and
//! which breadcrumb trail leads to it. All three answers come from the same
//! predicates, so the menu and the guard never disagree except on entries
//! marked `hide_in_navigation`.
//!
//! ## Quick Start
//!
//! ```rust
//! use portal_access::{
//!     BreadcrumbOptions, Identity, PermissionSet, Role, RouteNode, Tier, authorize,
//!     breadcrumbs, filter_tree,
//! };
//!
//! let tree = vec![
//!     RouteNode::new("/", "Dashboard"),
//!     RouteNode::new("/members", "Members").with_roles([Role::Admin, Role::Board]),
//!     RouteNode::new("/events", "Events")
//!         .with_child(RouteNode::new("/events/:id", "Event Details").hidden()),
//! ];
//!
//! let member = Identity::new(Role::Member, Tier::Regular, PermissionSet::new());
//!
//! assert!(!authorize(&tree, "/members", Some(&member)).allowed);
//! assert!(authorize(&tree, "/events/42", Some(&member)).allowed);
//! assert_eq!(filter_tree(&tree, Some(&member)).len(), 2);
//!
//! let trail = breadcrumbs(&tree, "/events/42", &BreadcrumbOptions::default());
//! assert_eq!(trail.last().map(|item| item.label.as_str()), Some("Event Details"));
//! ```
//!
//! ## From Configuration
//!
//! ```rust,no_run
//! use portal_access::{AccessEngine, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/portal.yaml").await?;
//!     let engine = AccessEngine::from_config(&config)?;
//!     let admin = engine.identity(None, portal_access::Role::Admin, portal_access::Tier::Admin);
//!     println!("{:?}", engine.authorize("/admin/users", Some(&admin)));
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod engine;
pub mod routing;
pub mod utils;

pub use auth::{
    AccessRequirements, Identity, IdentityKey, Permission, PermissionCheck, PermissionResolver,
    PermissionSet, RbacSystem, Role, RoleDefinition, Tier, auth_satisfied, missing_permissions,
    permissions_satisfied, requirements_satisfied, role_satisfied, tier_satisfied,
};
pub use config::Config;
pub use engine::AccessEngine;
pub use routing::{
    AuthorizationVerdict, BreadcrumbItem, BreadcrumbOptions, DenialReason, RouteMatch, RouteNode,
    RouteTree, VerdictCache, authorize, breadcrumbs, filter_tree, is_node_active, node_satisfied,
    resolve,
};
pub use utils::error::{AccessError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
