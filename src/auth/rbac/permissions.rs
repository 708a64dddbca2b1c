//! Permission checking methods

use crate::auth::{Identity, Permission, PermissionSet, Role, Tier};

use super::helpers::RbacHelpers;
use super::system::RbacSystem;
use super::types::PermissionCheck;

impl RbacSystem {
    /// Every permission a role holds, including inherited grants
    ///
    /// Admin roles additionally hold the `*` wildcard.
    pub fn resolver_for(&self, role: Role) -> PermissionSet {
        let mut permissions = self.get_role_permissions(role);
        if self.is_admin(role) {
            permissions.insert(Permission::wildcard());
        }
        permissions
    }

    /// Build an identity whose resolver is the role's effective permissions
    pub fn identity(&self, subject: Option<&str>, role: Role, tier: Tier) -> Identity {
        let identity = Identity::new(role, tier, self.resolver_for(role));
        match subject {
            Some(subject) => identity.with_subject(subject),
            None => identity,
        }
    }

    /// Check that every required permission is granted
    pub fn check_permissions(&self, granted: &PermissionSet, required: &[Permission]) -> bool {
        required.iter().all(|permission| granted.contains(permission))
    }

    /// Check that at least one required permission is granted
    pub fn check_any_permission(&self, granted: &PermissionSet, required: &[Permission]) -> bool {
        required.iter().any(|permission| granted.contains(permission))
    }

    /// Detailed permission check for a role
    pub fn check_permission_detailed(&self, role: Role, required: &Permission) -> PermissionCheck {
        if self.is_admin(role) {
            return PermissionCheck {
                granted: true,
                granted_by_roles: vec![role],
                denial_reason: None,
            };
        }

        let granted_by_roles: Vec<Role> = self
            .role_lineage(role)
            .into_iter()
            .filter(|ancestor| {
                self.roles
                    .get(ancestor)
                    .is_some_and(|definition| definition.permissions.contains(required))
            })
            .collect();

        if granted_by_roles.is_empty() {
            PermissionCheck {
                granted: false,
                granted_by_roles,
                denial_reason: Some(format!("Missing permission: {}", required)),
            }
        } else {
            PermissionCheck {
                granted: true,
                granted_by_roles,
                denial_reason: None,
            }
        }
    }

    /// Check resource-level permissions
    pub fn check_resource_permission(
        &self,
        granted: &PermissionSet,
        resource: &str,
        action: &str,
    ) -> bool {
        self.check_permissions(granted, &[Permission::new(resource, action)])
    }

    /// Whether any role in the catalog holds `permission`
    pub fn grants_anywhere(&self, permission: &Permission) -> bool {
        Role::ALL
            .iter()
            .any(|role| self.resolver_for(*role).contains(permission))
    }
}
