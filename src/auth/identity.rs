//! Identity value objects
//!
//! An [`Identity`] is the role, tier and permission capability of the signed-in
//! user. It is rebuilt whenever the session user changes and never mutated.

use super::permission::{Permission, PermissionResolver};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Job-function role
///
/// Role checks are set membership; the declaration order below is only the
/// canonical order used when reporting a missing role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrator
    Admin,
    /// Board member
    Board,
    /// Regular member
    Member,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Board, Role::Member];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Board => "board",
            Role::Member => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "board" => Ok(Role::Board),
            "member" => Ok(Role::Member),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Membership tier, independent of [`Role`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Regular membership
    Regular,
    /// Board-level membership
    Board,
    /// Administrative membership
    Admin,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Regular, Tier::Board, Tier::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Regular => "regular",
            Tier::Board => "board",
            Tier::Admin => "admin",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Tier::Regular),
            "board" => Ok(Tier::Board),
            "admin" => Ok(Tier::Admin),
            _ => Err(format!("Invalid tier: {}", s)),
        }
    }
}

/// The user an authorization decision is made for
#[derive(Clone)]
pub struct Identity {
    subject: Option<String>,
    role: Role,
    tier: Tier,
    resolver: Arc<dyn PermissionResolver>,
}

/// Hashable summary of an identity, used as part of cache keys
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub subject: Option<String>,
    pub role: Role,
    pub tier: Tier,
    pub permissions: u64,
}

impl Identity {
    pub fn new<R>(role: Role, tier: Tier, resolver: R) -> Self
    where
        R: PermissionResolver + 'static,
    {
        Self {
            subject: None,
            role,
            tier,
            resolver: Arc::new(resolver),
        }
    }

    /// Build from an already shared resolver
    pub fn with_shared_resolver(
        role: Role,
        tier: Tier,
        resolver: Arc<dyn PermissionResolver>,
    ) -> Self {
        Self {
            subject: None,
            role,
            tier,
            resolver,
        }
    }

    /// Attach the user id this identity belongs to
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.resolver.has_permission(permission)
    }

    /// Cache key for this identity, or `None` when the resolver cannot be
    /// fingerprinted
    pub fn cache_key(&self) -> Option<IdentityKey> {
        let permissions = self.resolver.fingerprint()?;
        Some(IdentityKey {
            subject: self.subject.clone(),
            role: self.role,
            tier: self.tier,
            permissions,
        })
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("subject", &self.subject)
            .field("role", &self.role)
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}
