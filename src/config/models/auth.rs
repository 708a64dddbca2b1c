//! Role catalog configuration

use super::*;
use crate::auth::{Permission, Role, Tier};
use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role assumed when a caller does not name one
    #[serde(default = "default_role")]
    pub default_role: Role,
    /// Tier assumed when a caller does not name one
    #[serde(default = "default_tier")]
    pub default_tier: Tier,
    /// Roles that hold every permission
    #[serde(default)]
    pub admin_roles: Vec<Role>,
    /// Role grants; empty means the built-in catalog
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
}

/// Permissions granted to one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleGrant {
    pub role: Role,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Roles whose permissions are inherited
    #[serde(default)]
    pub inherits: Vec<Role>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            default_tier: default_tier(),
            admin_roles: Vec::new(),
            roles: Vec::new(),
        }
    }
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.default_tier != default_tier() {
            self.default_tier = other.default_tier;
        }
        if !other.admin_roles.is_empty() {
            self.admin_roles = other.admin_roles;
        }
        // Grants are replaced per role
        for grant in other.roles {
            match self.roles.iter_mut().find(|g| g.role == grant.role) {
                Some(existing) => *existing = grant,
                None => self.roles.push(grant),
            }
        }
        self
    }
}
