//! Route tree nodes

use crate::auth::predicates::{AccessRequirements, requirements_satisfied};
use crate::auth::{Identity, Permission, Role, Tier};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// One entry of the static route/navigation tree
///
/// `path` is absolute (`/admin/users`) and may contain `:param` segments. A
/// node without a path is a pure menu group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Explicit sibling position; unordered siblings follow, sorted by label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub requirements: AccessRequirements,
    /// Reachable by URL but never listed in menus
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide_in_navigation: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Create a routable node
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::group(label)
        }
    }

    /// Create a path-less menu group
    pub fn group(label: impl Into<String>) -> Self {
        Self {
            path: None,
            label: label.into(),
            icon: None,
            order: None,
            description: None,
            requirements: AccessRequirements::default(),
            hide_in_navigation: false,
            children: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Require a signed-in identity without naming a role
    pub fn requiring_auth(mut self) -> Self {
        self.requirements.requires_auth = true;
        self
    }

    pub fn with_roles<I: IntoIterator<Item = Role>>(mut self, roles: I) -> Self {
        self.requirements.required_roles.extend(roles);
        self
    }

    pub fn with_tiers<I: IntoIterator<Item = Tier>>(mut self, tiers: I) -> Self {
        self.requirements.required_tiers.extend(tiers);
        self
    }

    pub fn with_permissions<I: IntoIterator<Item = Permission>>(mut self, permissions: I) -> Self {
        self.requirements.required_permissions.extend(permissions);
        self
    }

    /// Add required permissions from `resource:action` tokens
    pub fn with_permission_tokens<I, S>(self, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let permissions = tokens
            .into_iter()
            .map(|token| Permission::parse(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_permissions(permissions))
    }

    pub fn hidden(mut self) -> Self {
        self.hide_in_navigation = true;
        self
    }

    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I: IntoIterator<Item = RouteNode>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_group(&self) -> bool {
        self.path.is_none()
    }

    /// Number of nodes in this subtree, including `self`
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(RouteNode::subtree_len).sum::<usize>()
    }
}

/// Whether `identity` satisfies every requirement of `node`
///
/// Only the node's own requirements count; ancestors are not consulted.
pub fn node_satisfied(identity: Option<&Identity>, node: &RouteNode) -> bool {
    requirements_satisfied(identity, &node.requirements)
}
