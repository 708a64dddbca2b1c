//! Identity and authorization
//!
//! This module holds the identity model, permission tokens, the pure
//! authorization predicates and the role catalog that produces identities.

pub mod identity;
pub mod permission;
pub mod predicates;
pub mod rbac;

pub use identity::{Identity, IdentityKey, Role, Tier};
pub use permission::{Permission, PermissionResolver, PermissionSet, WILDCARD};
pub use predicates::{
    AccessRequirements, auth_satisfied, missing_permissions, permissions_satisfied,
    requirements_satisfied, role_satisfied, tier_satisfied,
};
pub use rbac::{PermissionCheck, RbacSystem, RoleDefinition};
