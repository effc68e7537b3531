//! Navigation guard.
//!
//! DESIGN
//! ======
//! `decide` is a pure transition function over the derived authentication
//! status and the target route's descriptor: it emits exactly one decision
//! per evaluation and touches nothing. It runs synchronously against the
//! already-resident session, never awaiting the network, so a pending
//! navigation is always resolved immediately.
//!
//! `use_route_guard` is the only place a decision is applied: each routed
//! page registers the guard for its own descriptor, and an effect re-runs it
//! whenever the session changes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{AuthStatus, ClientSessionStore};

use super::routes::{RouteDescriptor, RouteName, descriptor};

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested route.
    Allow,
    /// Navigate to this route instead.
    Redirect(RouteName),
}

/// Decide whether a transition to `target` may proceed.
///
/// First match wins:
/// 1. no session, protected target → bounce to Login;
/// 2. active session, public target → bounce to Dashboard. Keyed on
///    `requires_auth` alone, so an authenticated visit to Register bounces
///    exactly like one to Login;
/// 3. anything else is allowed.
#[must_use]
pub fn decide(status: AuthStatus, target: RouteDescriptor) -> GuardDecision {
    match status {
        AuthStatus::Unauthenticated if target.requires_auth => {
            GuardDecision::Redirect(RouteName::Login)
        }
        AuthStatus::Authenticated if !target.requires_auth => {
            GuardDecision::Redirect(RouteName::Dashboard)
        }
        _ => GuardDecision::Allow,
    }
}

/// Guard the page rendering `target`: evaluate [`decide`] against the current
/// session and apply any redirect.
pub fn use_route_guard(target: RouteName) {
    let session = expect_context::<RwSignal<ClientSessionStore>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let status = session.with(ClientSessionStore::status);
        match decide(status, descriptor(target)) {
            GuardDecision::Allow => {}
            GuardDecision::Redirect(to) => navigate(to.path(), NavigateOptions::default()),
        }
    });
}
