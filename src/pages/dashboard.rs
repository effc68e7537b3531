//! Dashboard page.

use leptos::prelude::*;

use crate::routing::guard::use_route_guard;
use crate::routing::routes::RouteName;
use crate::state::session::ClientSessionStore;

/// Dashboard — the landing view for an authenticated session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    use_route_guard(RouteName::Dashboard);

    let session = expect_context::<RwSignal<ClientSessionStore>>();
    let greeting = move || {
        session.with(|store| {
            store
                .session()
                .user
                .as_ref()
                .and_then(|u| u.get("username").and_then(|v| v.as_str()))
                .map_or_else(|| "Welcome".to_owned(), |name| format!("Welcome, {name}"))
        })
    };

    view! {
        <section class="page page--dashboard">
            <h1>{greeting}</h1>
            <p>"Monitoring overview will appear here."</p>
        </section>
    }
}
