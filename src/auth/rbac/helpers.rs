//! Helper methods for RBAC operations

use std::collections::BTreeSet;

use super::system::RbacSystem;
use crate::auth::{PermissionSet, Role};

pub(super) trait RbacHelpers {
    /// Get all permissions for a role (including inherited)
    fn get_role_permissions(&self, role: Role) -> PermissionSet;

    /// Roles reachable from `role` through inheritance, `role` included
    fn role_lineage(&self, role: Role) -> Vec<Role>;
}

impl RbacHelpers for RbacSystem {
    fn get_role_permissions(&self, role: Role) -> PermissionSet {
        let mut permissions = PermissionSet::new();
        for ancestor in self.role_lineage(role) {
            if let Some(definition) = self.roles.get(&ancestor) {
                permissions.extend(definition.permissions.iter().cloned());
            }
        }
        permissions
    }

    fn role_lineage(&self, role: Role) -> Vec<Role> {
        let mut visited = BTreeSet::new();
        let mut lineage = Vec::new();
        let mut pending = vec![role];

        // Inheritance cycles terminate on the visited set
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            lineage.push(current);
            if let Some(definition) = self.roles.get(&current) {
                pending.extend(definition.parent_roles.iter().rev().copied());
            }
        }
        lineage
    }
}
