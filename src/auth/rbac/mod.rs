//! Role-Based Access Control (RBAC) system
//!
//! Maps each [`Role`](crate::auth::Role) to the permission tokens it grants and
//! builds [`Identity`](crate::auth::Identity) values from that catalog.

mod helpers;
mod permissions;
mod roles;
mod system;
mod types;

pub use system::RbacSystem;
pub use types::{PermissionCheck, RoleDefinition};
