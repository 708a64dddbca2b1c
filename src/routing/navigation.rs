//! Menu derivation
//!
//! [`filter_tree`] prunes the route tree to the entries an identity may see.
//! A node survives when it is listed in menus and either grants access itself
//! or leads to at least one surviving descendant.

use super::matcher::{match_pattern, matches_prefix, path_segments};
use super::node::{RouteNode, node_satisfied};
use crate::auth::Identity;
use std::cmp::Ordering;

/// Sibling ordering: explicit `order` first (ascending), then by label
/// ignoring case; ties keep declared order
pub fn compare_siblings(a: &RouteNode, b: &RouteNode) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.label.to_lowercase().cmp(&b.label.to_lowercase()),
    }
}

/// Siblings in display order
pub fn sort_siblings(nodes: &[RouteNode]) -> Vec<&RouteNode> {
    let mut sorted: Vec<&RouteNode> = nodes.iter().collect();
    sorted.sort_by(|a, b| compare_siblings(a, b));
    sorted
}

/// The visible subtree for `identity`, sorted for display
pub fn filter_tree(tree: &[RouteNode], identity: Option<&Identity>) -> Vec<RouteNode> {
    sort_siblings(tree)
        .into_iter()
        .filter_map(|node| filter_node(node, identity))
        .collect()
}

fn filter_node(node: &RouteNode, identity: Option<&Identity>) -> Option<RouteNode> {
    if node.hide_in_navigation {
        return None;
    }

    let children = filter_tree(&node.children, identity);
    let reachable = node.path.is_some() && node_satisfied(identity, node);
    if !reachable && children.is_empty() {
        return None;
    }

    Some(RouteNode {
        path: node.path.clone(),
        label: node.label.clone(),
        icon: node.icon.clone(),
        order: node.order,
        description: node.description.clone(),
        requirements: node.requirements.clone(),
        hide_in_navigation: false,
        children,
    })
}

/// Whether a menu entry should render as active for `current_path`
///
/// True when the node's pattern matches the path, when the path lies below
/// the node's pattern, or when any child is active.
pub fn is_node_active(node: &RouteNode, current_path: &str) -> bool {
    let segments = path_segments(current_path);
    is_active(node, &segments)
}

fn is_active(node: &RouteNode, segments: &[&str]) -> bool {
    if let Some(pattern) = node.path.as_deref() {
        if match_pattern(pattern, segments).is_some() || matches_prefix(pattern, segments) {
            return true;
        }
    }
    node.children.iter().any(|child| is_active(child, segments))
}
