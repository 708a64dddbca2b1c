//! Validation trait definition

/// Validation trait for configuration sections
///
/// Returns a human-readable message; callers wrap it into
/// [`AccessError::Config`](crate::utils::error::AccessError::Config).
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
