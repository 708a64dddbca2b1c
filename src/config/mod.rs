//! Configuration management for the access engine
//!
//! This module handles loading, validation, and serialization of the portal
//! configuration: route tree, role catalog, breadcrumb options, verdict cache
//! and logging.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::routing::RouteNode;
use crate::utils::error::{AccessError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the access engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Portal configuration
    pub portal: PortalConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let portal: PortalConfig = serde_yaml::from_str(content)
            .map_err(|e| AccessError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { portal };
        config.validate()?;
        Ok(config)
    }

    /// Get the route tree
    pub fn routes(&self) -> &[RouteNode] {
        &self.portal.routes
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.portal.rbac
    }

    /// Get breadcrumb configuration
    pub fn breadcrumbs(&self) -> &BreadcrumbConfig {
        &self.portal.breadcrumbs
    }

    /// Get cache configuration
    pub fn cache(&self) -> &CacheConfig {
        &self.portal.cache
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.portal.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.portal.validate().map_err(AccessError::Config)?;
        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.portal = self.portal.merge(other.portal);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.portal)
            .map_err(|e| AccessError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.portal)
            .map_err(|e| AccessError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
