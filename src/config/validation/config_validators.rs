//! Core configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::routing::RouteTree;
use tracing::debug;
use tracing_subscriber::EnvFilter;

impl Validate for PortalConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating portal configuration");

        self.breadcrumbs
            .validate()
            .map_err(|e| format!("Breadcrumb config error: {}", e))?;
        self.rbac
            .validate()
            .map_err(|e| format!("RBAC config error: {}", e))?;
        self.cache
            .validate()
            .map_err(|e| format!("Cache config error: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;

        RouteTree::new(self.routes.clone())
            .map_err(|e| format!("Route config error: {}", e))?;

        debug!("Portal configuration validation completed");
        Ok(())
    }
}

impl Validate for BreadcrumbConfig {
    fn validate(&self) -> Result<(), String> {
        if self.show_home && self.home_label.trim().is_empty() {
            return Err("Home label cannot be empty when show_home is enabled".to_string());
        }
        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.max_entries == 0 {
            return Err("Cache max_entries must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;
        Ok(())
    }
}
