//! Error types for the access engine

use crate::auth::{Permission, Role, Tier};
use thiserror::Error;

/// Result type alias for the access engine
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for the access engine
#[derive(Error, Debug)]
pub enum AccessError {
    /// No route matches the requested path
    #[error("Not found: {0}")]
    NotFound(String),

    /// The route is restricted and nobody is signed in
    #[error("Authentication required")]
    AuthenticationRequired,

    /// The identity's role is not among the route's required roles
    #[error("Role '{required}' required")]
    RoleDenied { required: Role },

    /// The identity's tier is not among the route's required tiers
    #[error("Tier '{required}' required")]
    TierDenied { required: Tier },

    /// One or more required permissions are not held
    #[error("Missing permissions: {}", format_permissions(.missing))]
    PermissionDenied { missing: Vec<Permission> },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_permissions(missing: &[Permission]) -> String {
    missing
        .iter()
        .map(Permission::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
