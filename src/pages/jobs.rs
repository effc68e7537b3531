//! Jobs page.

use leptos::prelude::*;

use crate::routing::guard::use_route_guard;
use crate::routing::routes::RouteName;

/// Jobs — placeholder view behind the session guard.
#[component]
pub fn JobsPage() -> impl IntoView {
    use_route_guard(RouteName::Jobs);

    view! {
        <section class="page page--jobs">
            <h1>"Jobs"</h1>
        </section>
    }
}
