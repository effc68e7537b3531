//! Monitoring rules page.

use leptos::prelude::*;

use crate::routing::guard::use_route_guard;
use crate::routing::routes::RouteName;

/// Monitoring rules — placeholder view behind the session guard.
#[component]
pub fn MonitoringRulesPage() -> impl IntoView {
    use_route_guard(RouteName::MonitoringRules);

    view! {
        <section class="page page--monitoring-rules">
            <h1>"Monitoring Rules"</h1>
        </section>
    }
}
