//! Permission tokens and resolvers
//!
//! A permission is a `resource:action` token such as `event:write`. The action
//! may be the wildcard `*` (every action on the resource) and may carry extra
//! `:`-separated qualifiers (`user:read:self`); the split happens on the first
//! colon. The bare token `*` grants everything.

use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Token granting every permission
pub const WILDCARD: &str = "*";

/// A `resource:action` permission token
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permission {
    resource: String,
    action: String,
}

impl Permission {
    /// Build a permission from its parts
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    /// The global wildcard `*`
    pub fn wildcard() -> Self {
        Self::new(WILDCARD, "")
    }

    /// Parse a permission token
    ///
    /// # Errors
    /// - [`AccessError::Validation`] if the token is empty, lacks a colon, or
    ///   has an empty resource or action.
    pub fn parse(value: &str) -> Result<Self> {
        value.parse()
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Whether this is the bare `*` token
    pub fn is_wildcard(&self) -> bool {
        self.resource == WILDCARD && self.action.is_empty()
    }

    /// Whether this grant covers `required`
    ///
    /// `*` covers everything, `resource:*` covers every action on the
    /// resource, anything else must match exactly.
    pub fn grants(&self, required: &Permission) -> bool {
        if self.is_wildcard() {
            return true;
        }
        if self.resource != required.resource {
            return false;
        }
        self.action == WILDCARD || self.action == required.action
    }

    /// Render as `resource:action`
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return f.write_str(WILDCARD);
        }
        write!(f, "{}:{}", self.resource, self.action)
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value == WILDCARD {
            return Ok(Self::wildcard());
        }
        let (resource, action) = value
            .split_once(':')
            .ok_or_else(|| AccessError::validation(format!("invalid permission: {}", value)))?;
        if resource.is_empty() || action.is_empty() {
            return Err(AccessError::validation(format!(
                "invalid permission: {}",
                value
            )));
        }
        Ok(Self::new(resource, action))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Capability answering "does this identity hold `permission`"
///
/// The engine never knows the permission catalog; callers inject one of these.
#[cfg_attr(test, mockall::automock)]
pub trait PermissionResolver: Send + Sync {
    fn has_permission(&self, permission: &Permission) -> bool;

    /// Stable fingerprint of the grants, if the resolver can produce one.
    ///
    /// Resolvers returning `None` are never cached.
    fn fingerprint(&self) -> Option<u64> {
        None
    }
}

impl<F> PermissionResolver for F
where
    F: Fn(&Permission) -> bool + Send + Sync,
{
    fn has_permission(&self, permission: &Permission) -> bool {
        self(permission)
    }
}

/// Explicit set of granted permissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    grants: BTreeSet<Permission>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every token
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grants = tokens
            .into_iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { grants })
    }

    pub fn insert(&mut self, permission: Permission) -> bool {
        self.grants.insert(permission)
    }

    pub fn extend<I: IntoIterator<Item = Permission>>(&mut self, permissions: I) {
        self.grants.extend(permissions);
    }

    pub fn contains(&self, permission: &Permission) -> bool {
        self.grants.iter().any(|grant| grant.grants(permission))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.grants.iter()
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Whether every grant of `self` is also in `other`
    pub fn is_subset(&self, other: &PermissionSet) -> bool {
        self.grants.is_subset(&other.grants)
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

impl PermissionResolver for PermissionSet {
    fn has_permission(&self, permission: &Permission) -> bool {
        self.contains(permission)
    }

    fn fingerprint(&self) -> Option<u64> {
        // BTreeSet iteration is sorted, so equal sets hash equally.
        let mut hasher = DefaultHasher::new();
        self.grants.hash(&mut hasher);
        Some(hasher.finish())
    }
}
