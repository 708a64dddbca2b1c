//! Role catalog validators

use super::trait_def::Validate;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating RBAC configuration");

        let mut seen = HashSet::new();
        for grant in &self.roles {
            if !seen.insert(grant.role) {
                return Err(format!("Duplicate role grant: {}", grant.role));
            }
            if grant.inherits.contains(&grant.role) {
                return Err(format!("Role '{}' cannot inherit from itself", grant.role));
            }
        }

        Ok(())
    }
}
