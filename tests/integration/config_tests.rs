//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::common::assertions::{collect_paths, labels};
    use crate::common::portal_tree;
    use crate::{assert_err, assert_ok};
    use portal_access::{AccessError, Config, Role, RouteTree, Tier};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/portal.yaml.example");

    #[tokio::test]
    async fn test_example_config_loads() {
        let config = assert_ok!(Config::from_file(EXAMPLE).await);

        assert_eq!(config.rbac().admin_roles, vec![Role::Admin]);
        assert_eq!(config.rbac().default_role, Role::Member);
        assert_eq!(config.rbac().default_tier, Tier::Regular);
        assert!(config.rbac().roles.is_empty());
        assert_eq!(config.breadcrumbs().home_label, "Home");
        assert!(config.cache().enabled);
        assert_eq!(config.logging().level, "info");
    }

    #[tokio::test]
    async fn test_example_config_matches_fixture_tree() {
        let config = assert_ok!(Config::from_file(EXAMPLE).await);
        assert_eq!(config.routes(), portal_tree().as_slice());

        let tree = assert_ok!(RouteTree::new(config.routes().to_vec()));
        assert_eq!(tree.len(), 16);
        assert_eq!(collect_paths(tree.nodes()).len(), 15);
        assert_eq!(
            labels(tree.nodes()),
            vec![
                "Dashboard",
                "My Profile",
                "Events",
                "Volunteer",
                "Members",
                "Applications",
                "Administration",
                "Resources"
            ]
        );
    }

    #[tokio::test]
    async fn test_custom_role_grants_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
rbac:
  roles:
    - role: member
      description: Member
      permissions: ["event:read"]
    - role: board
      permissions: ["event:write"]
      inherits: [member]
routes:
  - path: /events
    label: Events
    required_permissions: ["event:read"]
"#,
        )
        .unwrap();

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.rbac().roles.len(), 2);
        assert_eq!(config.rbac().roles[1].inherits, vec![Role::Member]);
        assert_eq!(
            config.routes()[0]
                .requirements
                .required_permissions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["event:read"]
        );
    }

    #[test]
    fn test_rejected_documents() {
        let cases = [
            ("cache:\n  max_entries: 0\n", "Cache config error"),
            (
                "breadcrumbs:\n  home_label: ''\n",
                "Breadcrumb config error",
            ),
            (
                "rbac:\n  roles:\n    - role: board\n      inherits: [board]\n",
                "RBAC config error",
            ),
            (
                "rbac:\n  roles:\n    - role: board\n    - role: board\n",
                "RBAC config error",
            ),
            (
                "routes:\n  - path: /events/:1d\n    label: Event\n",
                "Route config error",
            ),
            (
                "routes:\n  - path: /events/:id\n    label: A\n  - path: /events/:eventId\n    label: B\n",
                "Route config error",
            ),
            (
                "routes:\n  - path: /e/:id/:id\n    label: A\n",
                "Route config error",
            ),
            (
                "routes:\n  - path: /events?tab=all\n    label: A\n",
                "Route config error",
            ),
        ];

        for (yaml, expected) in cases {
            let err = assert_err!(Config::from_yaml_str(yaml));
            assert!(
                err.to_string().contains(expected),
                "{:?} produced {}",
                yaml,
                err
            );
            assert!(err.halts_startup());
        }
    }

    #[test]
    fn test_malformed_permission_token_rejected() {
        let yaml = "routes:\n  - path: /a\n    label: A\n    required_permissions: [event]\n";
        let err = assert_err!(Config::from_yaml_str(yaml));
        assert!(matches!(err, AccessError::Config(msg) if msg.contains("parse")));
    }

    #[test]
    fn test_disabled_cache_may_have_zero_entries() {
        let config = assert_ok!(Config::from_yaml_str(
            "cache:\n  enabled: false\n  max_entries: 0\n"
        ));
        assert!(!config.cache().enabled);
    }

    #[tokio::test]
    async fn test_yaml_roundtrip_through_file() {
        let config = assert_ok!(Config::from_file(EXAMPLE).await);
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();

        let reloaded = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(reloaded, config);
    }
}
