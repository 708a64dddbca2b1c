//! Validated route tree

use super::matcher::{is_param_segment, path_segments};
use super::node::RouteNode;
use crate::utils::error::{AccessError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

static PARAM_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid parameter regex"));

/// An immutable, validated route tree
///
/// Construction rejects relative paths, empty labels, malformed `:param`
/// segments and siblings with the same path shape. The tree is never mutated
/// afterwards, so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTree {
    nodes: Vec<RouteNode>,
    version: u64,
}

impl RouteTree {
    pub fn new(nodes: Vec<RouteNode>) -> Result<Self> {
        validate_siblings(&nodes, "/")?;

        let mut hasher = DefaultHasher::new();
        nodes.hash(&mut hasher);
        let version = hasher.finish();

        let tree = Self { nodes, version };
        debug!(
            nodes = tree.len(),
            version = tree.version,
            "route tree validated"
        );
        Ok(tree)
    }

    /// Top-level nodes in declared order
    pub fn nodes(&self) -> &[RouteNode] {
        &self.nodes
    }

    /// Content hash; equal trees have equal versions
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Total number of nodes at every depth
    pub fn len(&self) -> usize {
        self.nodes.iter().map(RouteNode::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node in pre-order
    pub fn iter(&self) -> impl Iterator<Item = &RouteNode> {
        let mut stack: Vec<&RouteNode> = self.nodes.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn into_nodes(self) -> Vec<RouteNode> {
        self.nodes
    }
}

impl AsRef<[RouteNode]> for RouteTree {
    fn as_ref(&self) -> &[RouteNode] {
        &self.nodes
    }
}

fn validate_siblings(nodes: &[RouteNode], parent: &str) -> Result<()> {
    let mut shapes = BTreeSet::new();
    for node in nodes {
        validate_node(node)?;
        if let Some(path) = node.path.as_deref() {
            if !shapes.insert(path_shape(path)) {
                return Err(AccessError::config(format!(
                    "duplicate sibling path '{}' under '{}'",
                    path, parent
                )));
            }
        }
        let scope = node.path.as_deref().unwrap_or(parent);
        validate_siblings(&node.children, scope)?;
    }
    Ok(())
}

fn validate_node(node: &RouteNode) -> Result<()> {
    if node.label.trim().is_empty() {
        return Err(AccessError::config(format!(
            "route '{}' has an empty label",
            node.path.as_deref().unwrap_or("<group>")
        )));
    }

    let Some(path) = node.path.as_deref() else {
        return Ok(());
    };
    if !path.starts_with('/') {
        return Err(AccessError::config(format!(
            "route path '{}' must be absolute",
            path
        )));
    }
    if path.contains(['?', '#']) {
        return Err(AccessError::config(format!(
            "route path '{}' must not contain a query or fragment",
            path
        )));
    }

    let mut names = BTreeSet::new();
    for segment in path_segments(path) {
        if !is_param_segment(segment) {
            continue;
        }
        if !PARAM_SEGMENT.is_match(segment) {
            return Err(AccessError::config(format!(
                "invalid parameter segment '{}' in '{}'",
                segment, path
            )));
        }
        if !names.insert(segment) {
            return Err(AccessError::config(format!(
                "parameter '{}' appears twice in '{}'",
                segment, path
            )));
        }
    }
    Ok(())
}

/// Path with parameter names erased; `/events/:id` and `/events/:eventId`
/// have the same shape
fn path_shape(path: &str) -> String {
    let shape: Vec<&str> = path_segments(path)
        .into_iter()
        .map(|segment| if is_param_segment(segment) { ":" } else { segment })
        .collect();
    format!("/{}", shape.join("/"))
}
