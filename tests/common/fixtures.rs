//! Test fixtures and data factories
//!
//! The portal tree below mirrors `config/portal.yaml.example`.

use portal_access::config::RbacConfig;
use portal_access::{Identity, Permission, PermissionSet, RbacSystem, Role, RouteNode, Tier};

pub fn perm(token: &str) -> Permission {
    Permission::parse(token).expect("valid permission token")
}

/// A membership portal navigation tree
pub fn portal_tree() -> Vec<RouteNode> {
    vec![
        RouteNode::new("/", "Dashboard").with_icon("home").with_order(1),
        RouteNode::new("/profile", "My Profile")
            .with_icon("user")
            .with_order(2),
        RouteNode::new("/events", "Events")
            .with_icon("calendar")
            .with_order(3)
            .with_children([
                RouteNode::new("/events/registrations", "My Registrations"),
                RouteNode::new("/events/new", "Create Event")
                    .with_permissions([perm("event:write")]),
                RouteNode::new("/events/:id", "Event Details")
                    .hidden()
                    .with_child(
                        RouteNode::new("/events/:id/sessions/:sessionId", "Session").hidden(),
                    ),
            ]),
        RouteNode::new("/volunteer", "Volunteer")
            .with_icon("heart")
            .with_order(4)
            .with_tiers([Tier::Board, Tier::Admin]),
        RouteNode::new("/members", "Members")
            .with_icon("users")
            .with_order(5)
            .with_roles([Role::Admin, Role::Board]),
        RouteNode::new("/applications", "Applications")
            .with_icon("file")
            .with_order(6)
            .with_permissions([perm("application:read")]),
        RouteNode::new("/admin", "Administration")
            .with_icon("settings")
            .with_order(7)
            .with_roles([Role::Admin])
            .with_children([
                RouteNode::new("/admin/users", "User Management").with_roles([Role::Admin]),
                RouteNode::new("/admin/settings", "Settings")
                    .with_roles([Role::Admin])
                    .with_permissions([perm("settings:write")]),
            ]),
        RouteNode::group("Resources").with_children([
            RouteNode::new("/resources/handbook", "Handbook"),
            RouteNode::new("/resources/bylaws", "Bylaws").with_roles([Role::Board, Role::Admin]),
        ]),
    ]
}

/// Factory for identities backed by the built-in role catalog
pub struct IdentityFactory;

impl IdentityFactory {
    fn rbac() -> RbacSystem {
        let config = RbacConfig {
            admin_roles: vec![Role::Admin],
            ..RbacConfig::default()
        };
        RbacSystem::new(&config).expect("built-in catalog")
    }

    pub fn member() -> Identity {
        Self::rbac().identity(Some("member-1"), Role::Member, Tier::Regular)
    }

    pub fn board() -> Identity {
        Self::rbac().identity(Some("board-1"), Role::Board, Tier::Board)
    }

    pub fn admin() -> Identity {
        Self::rbac().identity(Some("admin-1"), Role::Admin, Tier::Admin)
    }

    /// Identity holding exactly `grants`
    pub fn with_grants(role: Role, tier: Tier, grants: &[&str]) -> Identity {
        let grants = PermissionSet::parse(grants.iter().copied()).expect("valid grants");
        Identity::new(role, tier, grants)
    }

    /// Every role/tier combination with the catalog grants of its role
    pub fn all_combinations() -> Vec<Identity> {
        let rbac = Self::rbac();
        let mut identities = Vec::new();
        for role in Role::ALL {
            for tier in Tier::ALL {
                identities.push(rbac.identity(None, role, tier));
            }
        }
        identities
    }
}
