use super::*;

// =============================================================
// Route table
// =============================================================

#[test]
fn public_routes_are_login_and_register() {
    let public: Vec<RouteName> = ROUTE_TABLE
        .iter()
        .filter(|d| !d.requires_auth)
        .map(|d| d.name)
        .collect();
    assert_eq!(public, vec![RouteName::Login, RouteName::Register]);
}

#[test]
fn protected_routes_cover_the_main_layout() {
    for name in [
        RouteName::Dashboard,
        RouteName::MonitoringRules,
        RouteName::ScanResults,
        RouteName::Jobs,
    ] {
        assert!(descriptor(name).requires_auth, "{name:?} should require auth");
    }
}

#[test]
fn table_has_one_entry_per_route() {
    for entry in &ROUTE_TABLE {
        let count = ROUTE_TABLE.iter().filter(|d| d.name == entry.name).count();
        assert_eq!(count, 1, "{:?} listed more than once", entry.name);
    }
}

// =============================================================
// Paths
// =============================================================

#[test]
fn dashboard_is_the_root_path() {
    assert_eq!(RouteName::Dashboard.path(), "/");
}

#[test]
fn paths_are_unique() {
    let paths: Vec<&str> = ROUTE_TABLE.iter().map(|d| d.name.path()).collect();
    for path in &paths {
        assert_eq!(paths.iter().filter(|p| *p == path).count(), 1);
    }
}

#[test]
fn descriptor_returns_the_table_entry() {
    let d = descriptor(RouteName::Register);
    assert_eq!(d.name, RouteName::Register);
    assert!(!d.requires_auth);
}
