//! Breadcrumb configuration

use super::*;
use crate::routing::BreadcrumbOptions;
use serde::{Deserialize, Serialize};

/// Breadcrumb configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbConfig {
    /// Label of the synthetic home item
    #[serde(default = "default_home_label")]
    pub home_label: String,
    /// Icon of the synthetic home item; `null` renders none
    #[serde(default = "default_home_icon")]
    pub home_icon: Option<String>,
    /// Prepend a home item to non-root trails
    #[serde(default = "default_true")]
    pub show_home: bool,
    /// Collapse trails longer than this
    #[serde(default)]
    pub max_items: Option<usize>,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            home_label: default_home_label(),
            home_icon: default_home_icon(),
            show_home: true,
            max_items: None,
        }
    }
}

impl BreadcrumbConfig {
    /// Merge breadcrumb configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.home_label != default_home_label() {
            self.home_label = other.home_label;
        }
        if other.home_icon != default_home_icon() {
            self.home_icon = other.home_icon;
        }
        if !other.show_home {
            self.show_home = other.show_home;
        }
        if other.max_items.is_some() {
            self.max_items = other.max_items;
        }
        self
    }

    pub fn to_options(&self) -> BreadcrumbOptions {
        BreadcrumbOptions {
            home_label: self.home_label.clone(),
            home_icon: self.home_icon.clone(),
            show_home: self.show_home,
            max_items: self.max_items,
        }
    }
}
