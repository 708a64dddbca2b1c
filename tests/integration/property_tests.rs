//! Laws relating the menu, the guard and breadcrumbs
//!
//! Each law is checked for every role/tier combination against the portal
//! fixture tree.

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_no_dead_entries, collect_paths, find};
    use crate::common::{IdentityFactory, portal_tree};
    use portal_access::{
        BreadcrumbItem, BreadcrumbOptions, Identity, Role, RouteNode, Tier, authorize,
        breadcrumbs, filter_tree, node_satisfied,
    };
    use portal_access::routing::truncate_trail;

    fn identities() -> Vec<Option<Identity>> {
        let mut all: Vec<Option<Identity>> = IdentityFactory::all_combinations()
            .into_iter()
            .map(Some)
            .collect();
        all.push(None);
        all
    }

    /// Listed nodes paired with whether an ancestor or the node itself is hidden
    fn visit<'a>(nodes: &'a [RouteNode], hidden: bool, out: &mut Vec<(&'a RouteNode, bool)>) {
        for node in nodes {
            let hidden = hidden || node.hide_in_navigation;
            out.push((node, hidden));
            visit(&node.children, hidden, out);
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let tree = portal_tree();
        for identity in identities() {
            let once = filter_tree(&tree, identity.as_ref());
            let twice = filter_tree(&once, identity.as_ref());
            assert_eq!(once, twice, "{:?}", identity);
        }
    }

    #[test]
    fn test_filtered_tree_has_no_dead_entries() {
        let tree = portal_tree();
        for identity in identities() {
            assert_no_dead_entries(&filter_tree(&tree, identity.as_ref()));
        }
    }

    #[test]
    fn test_menu_agrees_with_guard_for_listed_routes() {
        let tree = portal_tree();
        let mut nodes = Vec::new();
        visit(&tree, false, &mut nodes);

        for identity in identities() {
            let menu = filter_tree(&tree, identity.as_ref());
            for (node, hidden) in &nodes {
                let Some(path) = node.path.as_deref() else {
                    continue;
                };
                let allowed = authorize(&tree, path, identity.as_ref()).allowed;
                assert_eq!(allowed, node_satisfied(identity.as_ref(), node));
                if *hidden {
                    assert!(find(&menu, path).is_none());
                } else {
                    assert_eq!(
                        find(&menu, path).is_some(),
                        allowed,
                        "{} for {:?}",
                        path,
                        identity
                    );
                }
            }
        }
    }

    #[test]
    fn test_hidden_routes_stay_reachable() {
        for identity in identities() {
            let tree = portal_tree();
            let menu = filter_tree(&tree, identity.as_ref());
            assert!(find(&menu, "/events/:id").is_none());
            assert!(authorize(&tree, "/events/42", identity.as_ref()).allowed);
            assert!(authorize(&tree, "/events/42/sessions/7", identity.as_ref()).allowed);
        }
    }

    #[test]
    fn test_kept_nodes_are_unchanged_apart_from_children() {
        let tree = portal_tree();
        for identity in identities() {
            let menu = filter_tree(&tree, identity.as_ref());
            let mut kept = Vec::new();
            visit(&menu, false, &mut kept);
            for (node, _) in kept {
                let Some(path) = node.path.as_deref() else {
                    continue;
                };
                let original = find(&tree, path).unwrap();
                assert_eq!(node.label, original.label);
                assert_eq!(node.icon, original.icon);
                assert_eq!(node.requirements, original.requirements);
                for child in &node.children {
                    assert!(original.children.iter().any(|c| c.label == child.label));
                }
            }
        }
    }

    #[test]
    fn test_more_grants_never_shrink_menu_or_access() {
        let tree = portal_tree();
        for role in Role::ALL {
            for tier in Tier::ALL {
                let fewer = IdentityFactory::with_grants(role, tier, &[]);
                let more = IdentityFactory::with_grants(
                    role,
                    tier,
                    &["event:write", "application:read", "settings:write"],
                );
                let fewer_paths = collect_paths(&filter_tree(&tree, Some(&fewer)));
                let more_paths = collect_paths(&filter_tree(&tree, Some(&more)));
                for path in &fewer_paths {
                    assert!(more_paths.contains(path), "{} lost for {:?}/{:?}", path, role, tier);
                }

                for path in collect_paths(&tree) {
                    if authorize(&tree, &path, Some(&fewer)).allowed {
                        assert!(
                            authorize(&tree, &path, Some(&more)).allowed,
                            "{} denied with more grants for {:?}/{:?}",
                            path,
                            role,
                            tier
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_anonymous_menu_is_a_subset_of_every_identity() {
        let tree = portal_tree();
        let anonymous = collect_paths(&filter_tree(&tree, None));
        for identity in IdentityFactory::all_combinations() {
            let paths = collect_paths(&filter_tree(&tree, Some(&identity)));
            for path in &anonymous {
                assert!(paths.contains(path));
            }
        }
    }

    #[test]
    fn test_trail_has_one_current_item_at_the_end() {
        let tree = portal_tree();
        let options = BreadcrumbOptions::default();
        for path in ["/profile", "/events/42", "/admin/users", "/a/b/c/d/e"] {
            let trail = breadcrumbs(&tree, path, &options);
            assert_eq!(trail.iter().filter(|item| item.is_current).count(), 1);
            assert!(trail.last().unwrap().is_current);
            assert_eq!(trail[0].label, "Home");
            for item in &trail[..trail.len() - 1] {
                let prefix = item.path.as_deref().unwrap();
                assert!(path.starts_with(prefix));
            }
        }
    }

    #[test]
    fn test_truncation_law() {
        let item = |i: usize| BreadcrumbItem {
            label: format!("item-{}", i),
            path: Some(format!("/{}", i)),
            icon: None,
            is_current: false,
        };

        for len in 1..8 {
            let items: Vec<BreadcrumbItem> = (0..len).map(item).collect();
            for max_items in 0..8 {
                let limit = max_items.max(2);
                let truncated = truncate_trail(items.clone(), max_items);
                if len <= limit {
                    assert_eq!(truncated, items);
                    continue;
                }

                assert_eq!(truncated.len(), limit + 1);
                assert_eq!(truncated[0], items[0]);
                assert!(truncated[1].is_ellipsis());
                assert_eq!(truncated[2..], items[len - (limit - 1)..]);
            }
        }
    }
}
