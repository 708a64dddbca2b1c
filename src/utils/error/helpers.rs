//! Helper functions for creating and classifying errors

use super::types::AccessError;

impl AccessError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    /// Whether this error is an access decision rather than a failure
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::AuthenticationRequired
                | Self::RoleDenied { .. }
                | Self::TierDenied { .. }
                | Self::PermissionDenied { .. }
        )
    }

    /// Whether the engine cannot start with this error
    pub fn halts_startup(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Validation(_) | Self::Yaml(_) | Self::Io(_)
        )
    }

    /// HTTP status a web layer would map this error to
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::AuthenticationRequired => 401,
            Self::RoleDenied { .. } | Self::TierDenied { .. } | Self::PermissionDenied { .. } => 403,
            Self::Validation(_) => 400,
            Self::Config(_) | Self::Yaml(_) | Self::Serialization(_) | Self::Io(_) => 500,
        }
    }
}
