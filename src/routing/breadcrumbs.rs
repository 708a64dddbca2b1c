//! Breadcrumb derivation
//!
//! Every accumulated prefix of the current path becomes one trail item. A
//! prefix that resolves to a route takes that route's label, with `:name`
//! placeholders filled from the bound parameters (`User :userId` becomes
//! `User 42`); otherwise the raw segment is humanized (`event-details` becomes
//! `Event details`).

use super::matcher::{RouteParams, path_segments, resolve};
use super::node::RouteNode;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static LABEL_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("Invalid placeholder regex"));

/// Label of the truncation placeholder
pub const ELLIPSIS_LABEL: &str = "...";

/// One entry of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbItem {
    pub label: String,
    /// Link target; `None` for the current page and the ellipsis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_current: bool,
}

impl BreadcrumbItem {
    pub fn ellipsis() -> Self {
        Self {
            label: ELLIPSIS_LABEL.to_string(),
            path: None,
            icon: None,
            is_current: false,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        self.path.is_none() && !self.is_current && self.label == ELLIPSIS_LABEL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbOptions {
    pub home_label: String,
    /// Icon of the synthetic home item
    pub home_icon: Option<String>,
    pub show_home: bool,
    /// Longest trail before truncation; `None` never truncates
    pub max_items: Option<usize>,
}

impl Default for BreadcrumbOptions {
    fn default() -> Self {
        Self {
            home_label: "Home".to_string(),
            home_icon: Some("home".to_string()),
            show_home: true,
            max_items: None,
        }
    }
}

/// Trail from the root to `current_path`
///
/// Empty for the root path itself.
pub fn breadcrumbs(
    tree: &[RouteNode],
    current_path: &str,
    options: &BreadcrumbOptions,
) -> Vec<BreadcrumbItem> {
    let segments = path_segments(current_path);
    if segments.is_empty() {
        return Vec::new();
    }

    let mut items = Vec::with_capacity(segments.len() + 1);
    if options.show_home {
        items.push(BreadcrumbItem {
            label: options.home_label.clone(),
            path: Some("/".to_string()),
            icon: options.home_icon.clone(),
            is_current: false,
        });
    }

    let mut prefix = String::new();
    for segment in &segments {
        prefix.push('/');
        prefix.push_str(segment);

        let (label, icon) = match resolve(tree, &prefix) {
            Some(found) => (
                interpolate_label(&found.node.label, &found.params),
                found.node.icon.clone(),
            ),
            None => (humanize_segment(segment), None),
        };
        items.push(BreadcrumbItem {
            label,
            path: Some(prefix.clone()),
            icon,
            is_current: false,
        });
    }

    if let Some(last) = items.last_mut() {
        last.path = None;
        last.is_current = true;
    }

    match options.max_items {
        Some(max_items) => truncate_trail(items, max_items),
        None => items,
    }
}

/// Replace each `:name` in `label` with the bound parameter of that name
///
/// Placeholders without a bound parameter are left as written.
pub fn interpolate_label(label: &str, params: &RouteParams) -> String {
    if params.is_empty() {
        return label.to_string();
    }
    LABEL_PLACEHOLDER
        .replace_all(label, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Upper-case the first character and turn the remaining hyphens into spaces
pub fn humanize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.map(|c| if c == '-' { ' ' } else { c }))
            .collect(),
        None => String::new(),
    }
}

/// Keep the first item, an ellipsis, and the last `max_items - 1` items
///
/// Limits below 2 behave as 2. The ellipsis is not counted against the limit.
pub fn truncate_trail(items: Vec<BreadcrumbItem>, max_items: usize) -> Vec<BreadcrumbItem> {
    let max_items = max_items.max(2);
    if items.len() <= max_items {
        return items;
    }

    let tail_start = items.len() - (max_items - 1);
    let mut truncated = Vec::with_capacity(max_items + 1);
    let mut iter = items.into_iter();
    if let Some(first) = iter.next() {
        truncated.push(first);
    }
    truncated.push(BreadcrumbItem::ellipsis());
    truncated.extend(iter.skip(tail_start - 1));
    truncated
}
