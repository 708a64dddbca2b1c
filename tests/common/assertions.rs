//! Assertions over route trees and breadcrumb trails

use portal_access::{BreadcrumbItem, RouteNode};

/// Labels of one sibling list
pub fn labels(nodes: &[RouteNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.label.as_str()).collect()
}

pub fn trail_labels(items: &[BreadcrumbItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

/// Every path in the tree, pre-order
pub fn collect_paths(nodes: &[RouteNode]) -> Vec<String> {
    let mut paths = Vec::new();
    for node in nodes {
        if let Some(path) = &node.path {
            paths.push(path.clone());
        }
        paths.extend(collect_paths(&node.children));
    }
    paths
}

/// Find a node by path anywhere in the tree
pub fn find<'a>(nodes: &'a [RouteNode], path: &str) -> Option<&'a RouteNode> {
    nodes.iter().find_map(|node| {
        if node.path.as_deref() == Some(path) {
            Some(node)
        } else {
            find(&node.children, path)
        }
    })
}

/// Assert a filtered tree only holds listed nodes that lead somewhere
pub fn assert_no_dead_entries(nodes: &[RouteNode]) {
    for node in nodes {
        assert!(!node.hide_in_navigation, "hidden node {:?} kept", node.label);
        assert!(
            node.path.is_some() || !node.children.is_empty(),
            "empty group {:?} kept",
            node.label
        );
        assert_no_dead_entries(&node.children);
    }
}
