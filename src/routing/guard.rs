//! Route authorization guard

use super::matcher::resolve;
use super::node::RouteNode;
use crate::auth::predicates::{
    missing_permissions, permissions_satisfied, role_satisfied, tier_satisfied,
};
use crate::auth::{Identity, Permission, Role, Tier};
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Why a route was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    NotFound,
    AuthenticationRequired,
    Role,
    Tier,
    Permission,
}

impl DenialReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DenialReason::NotFound => "not_found",
            DenialReason::AuthenticationRequired => "authentication_required",
            DenialReason::Role => "role",
            DenialReason::Tier => "tier",
            DenialReason::Permission => "permission",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of authorizing one path for one identity
///
/// At most one of the `missing_*` fields is set, matching `reason`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationVerdict {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenialReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_tier: Option<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_permissions: Option<Vec<Permission>>,
}

impl AuthorizationVerdict {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            ..Self::default()
        }
    }

    fn deny(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
            ..Self::default()
        }
    }

    pub fn not_found() -> Self {
        Self::deny(DenialReason::NotFound)
    }

    pub fn authentication_required() -> Self {
        Self::deny(DenialReason::AuthenticationRequired)
    }

    pub fn role_denied(role: Role) -> Self {
        Self {
            missing_role: Some(role),
            ..Self::deny(DenialReason::Role)
        }
    }

    pub fn tier_denied(tier: Tier) -> Self {
        Self {
            missing_tier: Some(tier),
            ..Self::deny(DenialReason::Tier)
        }
    }

    pub fn permission_denied(missing: Vec<Permission>) -> Self {
        Self {
            missing_permissions: Some(missing),
            ..Self::deny(DenialReason::Permission)
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Convert a denial into the matching [`AccessError`]
    pub fn into_result(self, current_path: &str) -> Result<()> {
        if self.allowed {
            return Ok(());
        }
        Err(match self.reason {
            Some(DenialReason::AuthenticationRequired) => AccessError::AuthenticationRequired,
            Some(DenialReason::Role) => match self.missing_role {
                Some(required) => AccessError::RoleDenied { required },
                None => AccessError::not_found(current_path),
            },
            Some(DenialReason::Tier) => match self.missing_tier {
                Some(required) => AccessError::TierDenied { required },
                None => AccessError::not_found(current_path),
            },
            Some(DenialReason::Permission) => AccessError::PermissionDenied {
                missing: self.missing_permissions.unwrap_or_default(),
            },
            Some(DenialReason::NotFound) | None => AccessError::not_found(current_path),
        })
    }
}

/// Authorize `current_path` against the tree
///
/// The first node whose pattern matches decides; a denial there is final and
/// later siblings are not tried. `hide_in_navigation` plays no part.
pub fn authorize(
    tree: &[RouteNode],
    current_path: &str,
    identity: Option<&Identity>,
) -> AuthorizationVerdict {
    let Some(found) = resolve(tree, current_path) else {
        debug!(path = current_path, "no route matches path");
        return AuthorizationVerdict::not_found();
    };

    let verdict = authorize_node(found.node, identity);
    if let Some(reason) = verdict.reason {
        debug!(
            path = current_path,
            pattern = found.pattern(),
            reason = %reason,
            "route access denied"
        );
    }
    verdict
}

/// Verdict for a node that has already been resolved
pub fn authorize_node(node: &RouteNode, identity: Option<&Identity>) -> AuthorizationVerdict {
    let requirements = &node.requirements;

    let role_ok = role_satisfied(identity, &requirements.required_roles);
    let tier_ok = tier_satisfied(identity, &requirements.required_tiers);
    let permissions_ok = permissions_satisfied(identity, &requirements.required_permissions);

    if identity.is_none() && !requirements.is_public() {
        return AuthorizationVerdict::authentication_required();
    }
    if !role_ok {
        if let Some(role) = requirements.required_roles.first() {
            return AuthorizationVerdict::role_denied(*role);
        }
    }
    if !tier_ok {
        if let Some(tier) = requirements.required_tiers.first() {
            return AuthorizationVerdict::tier_denied(*tier);
        }
    }
    if !permissions_ok {
        return AuthorizationVerdict::permission_denied(missing_permissions(
            identity,
            &requirements.required_permissions,
        ));
    }
    AuthorizationVerdict::allow()
}
