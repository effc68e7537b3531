//! Protected application shell: navigation, current user, logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::routing::routes::RouteName;
use crate::state::session::{ClientSessionStore, ProfileRefresh};

/// Layout wrapping every protected view with the nav bar and an `Outlet`.
///
/// On mount it refreshes the user profile once, best-effort: a failed refresh
/// is logged and the last-known profile stays on screen.
#[component]
pub fn MainLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<ClientSessionStore>>();
    let navigate = use_navigate();

    leptos::task::spawn_local(async move {
        let mut store = session.get_untracked();
        if !store.is_authenticated() {
            return;
        }
        match store.refresh_profile(&HttpAuthApi).await {
            ProfileRefresh::Updated => session.set(store),
            ProfileRefresh::Rejected(rejection) => {
                leptos::logging::warn!(
                    "profile refresh rejected: code {} ({})",
                    rejection.code,
                    rejection.message.as_deref().unwrap_or("no message")
                );
            }
            ProfileRefresh::TransportFailed(err) => {
                leptos::logging::warn!("profile refresh failed: {err}");
            }
        }
    });

    let username = move || {
        session.with(|store| {
            store
                .session()
                .user
                .as_ref()
                .and_then(|u| u.get("username").and_then(|v| v.as_str()).map(str::to_owned))
                .unwrap_or_default()
        })
    };

    let on_logout = move |_| {
        session.update(ClientSessionStore::logout);
        navigate(RouteName::Login.path(), NavigateOptions::default());
    };

    view! {
        <div class="main-layout">
            <nav class="main-layout__nav">
                <span class="main-layout__brand">"Jobwatch"</span>
                <a href=RouteName::Dashboard.path()>"Dashboard"</a>
                <a href=RouteName::MonitoringRules.path()>"Monitoring Rules"</a>
                <a href=RouteName::ScanResults.path()>"Scan Results"</a>
                <a href=RouteName::Jobs.path()>"Jobs"</a>
                <span class="main-layout__user">{username}</span>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </nav>
            <main class="main-layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
