//! Registration page.
//!
//! Registration never establishes a session: a created account lands back on
//! the login page to sign in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::routing::guard::use_route_guard;
use crate::routing::routes::RouteName;
use crate::state::session::ClientSessionStore;

/// Register page — username/email/password form.
#[component]
pub fn RegisterPage() -> impl IntoView {
    use_route_guard(RouteName::Register);

    let session = expect_context::<RwSignal<ClientSessionStore>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get().trim().to_owned();
        let mail = email.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || mail.is_empty() || pass.is_empty() || pending.get() {
            return;
        }

        pending.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let store = session.get_untracked();
            match store.register(&HttpAuthApi, &user, &mail, &pass).await {
                Ok(true) => navigate(RouteName::Login.path(), NavigateOptions::default()),
                Ok(false) => error.set(Some("Registration failed".to_owned())),
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Create account"</h1>
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
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
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
                    "Register"
                </button>
            </form>
            <p>
                "Already registered? "
                <a href=RouteName::Login.path()>"Sign in"</a>
            </p>
        </div>
    }
}
