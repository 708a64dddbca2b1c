//! RBAC type definitions

use crate::auth::{PermissionSet, Role};
use serde::Serialize;
use std::collections::BTreeSet;

/// Role definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleDefinition {
    /// Role this definition applies to
    pub role: Role,
    /// Role description
    pub description: String,
    /// Permissions granted directly by this role
    pub permissions: PermissionSet,
    /// Parent roles (inheritance)
    pub parent_roles: BTreeSet<Role>,
    /// Whether this is a built-in role
    pub is_system: bool,
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Roles that granted the permission
    pub granted_by_roles: Vec<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
