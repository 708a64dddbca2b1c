//! Authorization predicates
//!
//! Pure functions shared by the navigation filter and the route guard. Every
//! function takes `Option<&Identity>`: an absent identity satisfies a
//! requirement only when that requirement is empty and sign-in is not
//! required.

use super::identity::{Identity, Role, Tier};
use super::permission::Permission;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Sign-in, role, tier and permission requirements attached to a route
///
/// An empty set means "no restriction" on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessRequirements {
    /// Any signed-in identity, whatever its role
    #[serde(default, skip_serializing_if = "is_false")]
    pub requires_auth: bool,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub required_roles: BTreeSet<Role>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub required_tiers: BTreeSet<Tier>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub required_permissions: BTreeSet<Permission>,
}

impl AccessRequirements {
    /// Whether anonymous visitors pass
    pub fn is_public(&self) -> bool {
        !self.requires_auth
            && self.required_roles.is_empty()
            && self.required_tiers.is_empty()
            && self.required_permissions.is_empty()
    }

    pub fn is_satisfied_by(&self, identity: Option<&Identity>) -> bool {
        requirements_satisfied(identity, self)
    }
}

pub fn auth_satisfied(identity: Option<&Identity>, requires_auth: bool) -> bool {
    !requires_auth || identity.is_some()
}

pub fn role_satisfied(identity: Option<&Identity>, required_roles: &BTreeSet<Role>) -> bool {
    if required_roles.is_empty() {
        return true;
    }
    identity.is_some_and(|identity| required_roles.contains(&identity.role()))
}

pub fn tier_satisfied(identity: Option<&Identity>, required_tiers: &BTreeSet<Tier>) -> bool {
    if required_tiers.is_empty() {
        return true;
    }
    identity.is_some_and(|identity| required_tiers.contains(&identity.tier()))
}

/// Every listed permission must resolve (AND semantics)
pub fn permissions_satisfied(
    identity: Option<&Identity>,
    required_permissions: &BTreeSet<Permission>,
) -> bool {
    if required_permissions.is_empty() {
        return true;
    }
    identity.is_some_and(|identity| {
        required_permissions
            .iter()
            .all(|permission| identity.has_permission(permission))
    })
}

/// Required permissions the identity does not hold, in canonical order
pub fn missing_permissions(
    identity: Option<&Identity>,
    required_permissions: &BTreeSet<Permission>,
) -> Vec<Permission> {
    required_permissions
        .iter()
        .filter(|permission| !identity.is_some_and(|identity| identity.has_permission(permission)))
        .cloned()
        .collect()
}

pub fn requirements_satisfied(
    identity: Option<&Identity>,
    requirements: &AccessRequirements,
) -> bool {
    auth_satisfied(identity, requirements.requires_auth)
        && role_satisfied(identity, &requirements.required_roles)
        && tier_satisfied(identity, &requirements.required_tiers)
        && permissions_satisfied(identity, &requirements.required_permissions)
}
