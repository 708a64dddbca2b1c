//! Route tree, path matching and the three derivations built on it
//!
//! - [`filter_tree`]: which entries a menu shows
//! - [`authorize`]: whether the current path may be opened
//! - [`breadcrumbs`]: the trail leading to the current path
//!
//! All of them evaluate access through [`node_satisfied`], so the menu and the
//! guard only disagree on entries marked `hide_in_navigation`.

pub mod breadcrumbs;
pub mod cache;
pub mod guard;
pub mod matcher;
pub mod navigation;
pub mod node;
pub mod tree;

pub use breadcrumbs::{
    BreadcrumbItem, BreadcrumbOptions, ELLIPSIS_LABEL, breadcrumbs, humanize_segment,
    interpolate_label, truncate_trail,
};
pub use cache::{VerdictCache, VerdictCacheStats};
pub use guard::{AuthorizationVerdict, DenialReason, authorize, authorize_node};
pub use matcher::{RouteMatch, RouteParams, normalize_path, path_segments, resolve};
pub use navigation::{compare_siblings, filter_tree, is_node_active, sort_siblings};
pub use node::{RouteNode, node_satisfied};
pub use tree::RouteTree;
