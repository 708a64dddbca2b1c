//! Navigation filter integration tests

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_no_dead_entries, find, labels};
    use crate::common::{IdentityFactory, portal_tree};
    use portal_access::{PermissionSet, Role, RouteNode, Tier, filter_tree, is_node_active};
    use portal_access::Identity;

    #[test]
    fn test_member_sees_admin_free_menu() {
        let tree = vec![
            RouteNode::new("/admin", "Administration")
                .with_roles([Role::Admin])
                .with_child(RouteNode::new("/admin/users", "Users").with_roles([Role::Admin])),
        ];
        let member = Identity::new(Role::Member, Tier::Regular, PermissionSet::new());
        assert!(filter_tree(&tree, Some(&member)).is_empty());

        let admin = Identity::new(Role::Admin, Tier::Admin, PermissionSet::new());
        let visible = filter_tree(&tree, Some(&admin));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].path.as_deref(), Some("/admin"));
        assert_eq!(visible[0].children.len(), 1);
        assert_eq!(visible[0].children[0].path.as_deref(), Some("/admin/users"));
    }

    #[test]
    fn test_portal_menu_per_role() {
        let tree = portal_tree();

        let member = filter_tree(&tree, Some(&IdentityFactory::member()));
        assert_eq!(labels(&member), vec!["Dashboard", "My Profile", "Events", "Resources"]);
        assert_eq!(labels(&member[2].children), vec!["My Registrations"]);
        assert_eq!(labels(&member[3].children), vec!["Handbook"]);

        let board = filter_tree(&tree, Some(&IdentityFactory::board()));
        assert_eq!(
            labels(&board),
            vec![
                "Dashboard",
                "My Profile",
                "Events",
                "Volunteer",
                "Members",
                "Applications",
                "Resources"
            ]
        );
        assert_eq!(
            labels(&board[2].children),
            vec!["Create Event", "My Registrations"]
        );
        assert_eq!(labels(&board[6].children), vec!["Bylaws", "Handbook"]);

        let admin = filter_tree(&tree, Some(&IdentityFactory::admin()));
        let administration = find(&admin, "/admin").unwrap();
        assert_eq!(
            labels(&administration.children),
            vec!["Settings", "User Management"]
        );
    }

    #[test]
    fn test_anonymous_menu_is_public_only() {
        let visible = filter_tree(&portal_tree(), None);
        assert_eq!(labels(&visible), vec!["Dashboard", "My Profile", "Events", "Resources"]);
        assert_no_dead_entries(&visible);
    }

    #[test]
    fn test_signed_in_entries_hidden_from_anonymous() {
        let tree = vec![
            RouteNode::new("/", "Home").with_order(1),
            RouteNode::new("/dashboard", "Dashboard")
                .with_order(2)
                .requiring_auth(),
            RouteNode::group("Account")
                .with_child(RouteNode::new("/account/settings", "Settings").requiring_auth()),
        ];

        let anonymous = filter_tree(&tree, None);
        assert_eq!(labels(&anonymous), vec!["Home"]);

        let member = filter_tree(&tree, Some(&IdentityFactory::member()));
        assert_eq!(labels(&member), vec!["Home", "Dashboard", "Account"]);
        assert!(member[1].requirements.requires_auth);
    }

    #[test]
    fn test_hidden_entries_never_listed() {
        let admin = filter_tree(&portal_tree(), Some(&IdentityFactory::admin()));
        assert!(find(&admin, "/events/:id").is_none());
        assert!(find(&admin, "/events/:id/sessions/:sessionId").is_none());
        assert_no_dead_entries(&admin);
    }

    #[test]
    fn test_kept_nodes_retain_requirements() {
        let board = filter_tree(&portal_tree(), Some(&IdentityFactory::board()));
        let members = find(&board, "/members").unwrap();
        assert!(members.requirements.required_roles.contains(&Role::Board));
    }

    #[test]
    fn test_active_entries() {
        let tree = portal_tree();
        let events = find(&tree, "/events").unwrap();
        assert!(is_node_active(events, "/events/42/sessions/7"));
        assert!(!is_node_active(&tree[0], "/events"));
        assert!(is_node_active(&tree[7], "/resources/handbook"));
    }
}
