//! Static route table.
//!
//! Route descriptors are fixed at startup and consumed read-only by the
//! guard; the router owns the actual component wiring in `app.rs`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every navigable view in the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Login,
    Register,
    Dashboard,
    MonitoringRules,
    ScanResults,
    Jobs,
}

impl RouteName {
    /// The route's path as registered with the router.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            RouteName::Login => "/login",
            RouteName::Register => "/register",
            RouteName::Dashboard => "/",
            RouteName::MonitoringRules => "/monitoring-rules",
            RouteName::ScanResults => "/scan-results",
            RouteName::Jobs => "/jobs",
        }
    }
}

/// A route plus its access requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: RouteName,
    pub requires_auth: bool,
}

/// The full route table. Login and Register are public; everything under the
/// main layout requires a session.
pub const ROUTE_TABLE: [RouteDescriptor; 6] = [
    RouteDescriptor { name: RouteName::Login, requires_auth: false },
    RouteDescriptor { name: RouteName::Register, requires_auth: false },
    RouteDescriptor { name: RouteName::Dashboard, requires_auth: true },
    RouteDescriptor { name: RouteName::MonitoringRules, requires_auth: true },
    RouteDescriptor { name: RouteName::ScanResults, requires_auth: true },
    RouteDescriptor { name: RouteName::Jobs, requires_auth: true },
];

/// Look up a route's descriptor in the table. Unlisted routes require auth.
#[must_use]
pub fn descriptor(name: RouteName) -> RouteDescriptor {
    ROUTE_TABLE
        .iter()
        .copied()
        .find(|d| d.name == name)
        .unwrap_or(RouteDescriptor { name, requires_auth: true })
}
