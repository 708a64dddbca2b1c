//! RBAC system core functionality

use crate::auth::{PermissionSet, Role};
use crate::config::{RbacConfig, RoleGrant};
use crate::utils::error::Result;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::types::RoleDefinition;

/// RBAC system for managing roles and permissions
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// RBAC configuration
    pub(super) config: RbacConfig,
    /// Role definitions
    pub(super) roles: BTreeMap<Role, RoleDefinition>,
}

impl RbacSystem {
    /// Create a new RBAC system
    ///
    /// Uses the built-in portal catalog unless the configuration lists roles.
    pub fn new(config: &RbacConfig) -> Result<Self> {
        info!("Initializing RBAC system");

        let mut rbac = Self {
            config: config.clone(),
            roles: BTreeMap::new(),
        };

        if config.roles.is_empty() {
            rbac.initialize_default_roles()?;
        } else {
            rbac.load_configured_roles(&config.roles);
        }
        rbac.warn_unknown_parents();

        info!("RBAC system initialized with {} roles", rbac.roles.len());
        Ok(rbac)
    }

    /// Initialize the built-in role catalog
    pub(super) fn initialize_default_roles(&mut self) -> Result<()> {
        debug!("Initializing default roles");

        let default_roles = vec![
            RoleDefinition {
                role: Role::Admin,
                description: "Administrator with full portal access".to_string(),
                permissions: PermissionSet::parse([
                    "user:read",
                    "user:write",
                    "user:delete",
                    "application:read",
                    "application:approve",
                    "application:reject",
                    "event:read",
                    "event:write",
                    "event:delete",
                    "volunteer:read",
                    "volunteer:write",
                    "volunteer:delete",
                    "report:read",
                    "system:manage",
                    "settings:read",
                    "settings:write",
                    "notification:read",
                    "notification:write",
                    "membership:read",
                    "membership:write",
                ])?,
                parent_roles: Default::default(),
                is_system: true,
            },
            RoleDefinition {
                role: Role::Board,
                description: "Board member managing events and applications".to_string(),
                permissions: PermissionSet::parse([
                    "user:read",
                    "application:read",
                    "application:approve",
                    "application:reject",
                    "event:read",
                    "event:write",
                    "volunteer:read",
                    "volunteer:write",
                    "report:read",
                    "notification:read",
                    "notification:write",
                ])?,
                parent_roles: Default::default(),
                is_system: true,
            },
            RoleDefinition {
                role: Role::Member,
                description: "Regular member".to_string(),
                permissions: PermissionSet::parse([
                    "user:read:self",
                    "user:write:self",
                    "event:read",
                    "event:register",
                    "volunteer:read",
                    "volunteer:apply",
                    "profile:read",
                    "profile:write",
                ])?,
                parent_roles: Default::default(),
                is_system: true,
            },
        ];

        for role in default_roles {
            self.roles.insert(role.role, role);
        }

        debug!("Initialized {} default roles", self.roles.len());
        Ok(())
    }

    /// Load role grants from configuration
    pub(super) fn load_configured_roles(&mut self, grants: &[RoleGrant]) {
        for grant in grants {
            let definition = self
                .roles
                .entry(grant.role)
                .or_insert_with(|| RoleDefinition {
                    role: grant.role,
                    description: String::new(),
                    permissions: PermissionSet::new(),
                    parent_roles: Default::default(),
                    is_system: false,
                });
            if let Some(description) = &grant.description {
                definition.description = description.clone();
            }
            definition.permissions.extend(grant.permissions.iter().cloned());
            definition.parent_roles.extend(grant.inherits.iter().copied());
        }
        debug!("Loaded {} configured roles", self.roles.len());
    }

    fn warn_unknown_parents(&self) {
        for definition in self.roles.values() {
            for parent in &definition.parent_roles {
                if !self.roles.contains_key(parent) {
                    warn!(
                        "Role '{}' inherits from undefined role '{}'",
                        definition.role, parent
                    );
                }
            }
        }
    }

    /// RBAC configuration this system was built from
    pub fn config(&self) -> &RbacConfig {
        &self.config
    }

    /// List all roles
    pub fn list_roles(&self) -> Vec<&RoleDefinition> {
        self.roles.values().collect()
    }
}
