//! Path matching shared by the route guard and breadcrumbs
//!
//! A literal pattern segment must equal the path segment; a `:name` segment
//! matches any single non-empty segment and binds it. Resolution walks the
//! tree depth-first in declared order, parents before children, and stops at
//! the first node whose pattern has the same shape as the path.

use super::node::RouteNode;
use std::collections::BTreeMap;

/// Path parameters bound by a match, keyed by name without the leading `:`
pub type RouteParams = BTreeMap<String, String>;

/// Non-empty segments of `path`, ignoring any query string or fragment
pub fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

/// Canonical form of `path`: leading slash, no empty segments, no query
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path_segments(path).join("/"))
}

pub fn is_param_segment(segment: &str) -> bool {
    segment.starts_with(':')
}

/// Match a route pattern against already split path segments
pub fn match_pattern(pattern: &str, segments: &[&str]) -> Option<RouteParams> {
    let pattern_segments = path_segments(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name.to_string(), (*actual).to_string());
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}

/// Whether `pattern` matches a strict prefix of `segments`
pub fn matches_prefix(pattern: &str, segments: &[&str]) -> bool {
    let pattern_segments = path_segments(pattern);
    if pattern_segments.is_empty() || pattern_segments.len() >= segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(segments)
        .all(|(expected, actual)| is_param_segment(expected) || expected == actual)
}

/// A resolved route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    pub node: &'a RouteNode,
    /// Enclosing nodes, outermost first
    pub ancestors: Vec<&'a RouteNode>,
    pub params: RouteParams,
}

impl RouteMatch<'_> {
    /// The pattern that matched, e.g. `/events/:id`
    pub fn pattern(&self) -> &str {
        self.node.path.as_deref().unwrap_or("")
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Find the first node whose pattern matches `current_path`
pub fn resolve<'a>(tree: &'a [RouteNode], current_path: &str) -> Option<RouteMatch<'a>> {
    let segments = path_segments(current_path);
    let mut ancestors = Vec::new();
    resolve_segments(tree, &segments, &mut ancestors)
}

fn resolve_segments<'a>(
    nodes: &'a [RouteNode],
    segments: &[&str],
    ancestors: &mut Vec<&'a RouteNode>,
) -> Option<RouteMatch<'a>> {
    for node in nodes {
        if let Some(pattern) = node.path.as_deref() {
            if let Some(params) = match_pattern(pattern, segments) {
                return Some(RouteMatch {
                    node,
                    ancestors: ancestors.clone(),
                    params,
                });
            }
        }

        ancestors.push(node);
        let found = resolve_segments(&node.children, segments, ancestors);
        ancestors.pop();
        if found.is_some() {
            return found;
        }
    }
    None
}
