//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::main_layout::MainLayout;
use crate::pages::{
    dashboard::DashboardPage, jobs::JobsPage, login::LoginPage,
    monitoring_rules::MonitoringRulesPage, register::RegisterPage, scan_results::ScanResultsPage,
};
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store once, seeded from the persisted mirror, provides
/// it via context, and sets up client-side routing. The four protected views
/// nest under [`MainLayout`]; Login and Register stand alone.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::load(BrowserStorage));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/jobwatch-ui.css"/>
        <Title text="Jobwatch"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=MainLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("monitoring-rules") view=MonitoringRulesPage/>
                    <Route path=StaticSegment("scan-results") view=ScanResultsPage/>
                    <Route path=StaticSegment("jobs") view=JobsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
