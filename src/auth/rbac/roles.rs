//! Role management methods

use crate::auth::Role;
use crate::utils::error::{AccessError, Result};

use super::system::RbacSystem;
use super::types::RoleDefinition;

impl RbacSystem {
    /// Get role definition
    pub fn get_role(&self, role: Role) -> Option<&RoleDefinition> {
        self.roles.get(&role)
    }

    /// Add or replace a custom role definition
    pub fn add_role(&mut self, definition: RoleDefinition) -> Result<()> {
        if definition.is_system
            || self
                .roles
                .get(&definition.role)
                .is_some_and(|existing| existing.is_system)
        {
            return Err(AccessError::validation("Cannot modify system roles"));
        }

        self.roles.insert(definition.role, definition);
        Ok(())
    }

    /// Whether the role receives every permission
    pub fn is_admin(&self, role: Role) -> bool {
        self.config.admin_roles.contains(&role)
    }
}
