//! Scan results page.

use leptos::prelude::*;

use crate::routing::guard::use_route_guard;
use crate::routing::routes::RouteName;

/// Scan results — placeholder view behind the session guard.
#[component]
pub fn ScanResultsPage() -> impl IntoView {
    use_route_guard(RouteName::ScanResults);

    view! {
        <section class="page page--scan-results">
            <h1>"Scan Results"</h1>
        </section>
    }
}
