//! Login page with a username/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::routing::guard::use_route_guard;
use crate::routing::routes::RouteName;
use crate::state::session::ClientSessionStore;

/// Login page — submits credentials and navigates to the dashboard on
/// success. A rejected login shows an inline message; a transport failure
/// shows the error text.
#[component]
pub fn LoginPage() -> impl IntoView {
    use_route_guard(RouteName::Login);

    let session = expect_context::<RwSignal<ClientSessionStore>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() || pending.get() {
            return;
        }

        pending.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let mut store = session.get_untracked();
            match store.login(&HttpAuthApi, &user, &pass).await {
                Ok(true) => {
                    session.set(store);
                    navigate(RouteName::Dashboard.path(), NavigateOptions::default());
                }
                Ok(false) => error.set(Some("Invalid username or password".to_owned())),
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Jobwatch"</h1>
            <form class="auth-form" on:submit=submit>
                <label class="auth-form__label">
                    "Username"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    "Sign in"
                </button>
            </form>
            <p>
                "No account? "
                <a href=RouteName::Register.path()>"Register"</a>
            </p>
        </div>
    }
}
