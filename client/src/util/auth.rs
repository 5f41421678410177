//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies the same admission rule on each navigation
//! and whenever the session changes. Role mismatch and missing session only
//! differ in where the user lands.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::AccountType;
use crate::routes::AppRoute;
use crate::state::session::AuthState;

/// Outcome of evaluating a route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still running: neutral placeholder, no redirect.
    Loading,
    /// Leave for another route. The requested route is not remembered.
    RedirectTo(AppRoute),
    Render,
}

/// Admission rule for signed-in routes.
#[must_use]
pub fn guard_decision(state: &AuthState, required_roles: Option<&[AccountType]>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    let Some(user) = &state.user else {
        return GuardDecision::RedirectTo(AppRoute::LOGIN_ENTRY);
    };
    match required_roles {
        Some(roles) if !roles.contains(&user.account_type) => GuardDecision::RedirectTo(AppRoute::HOME_ENTRY),
        _ => GuardDecision::Render,
    }
}

/// Whether a guarded page's content may be shown for `route`.
///
/// Anything but `Render` keeps the placeholder up, so a redirect never
/// flashes the page it is leaving.
#[must_use]
pub fn route_content_visible(state: &AuthState, route: AppRoute) -> bool {
    guard_decision(state, route.required_roles()) == GuardDecision::Render
}

/// Admission rule for login/registration pages: signed-in users go home.
///
/// The form stays visible while the restore runs.
#[must_use]
pub fn public_only_decision(state: &AuthState) -> GuardDecision {
    if !state.loading && state.user.is_some() {
        GuardDecision::RedirectTo(AppRoute::HOME_ENTRY)
    } else {
        GuardDecision::Render
    }
}

/// Re-evaluate `decide` whenever the session changes and navigate on redirects.
pub fn install_guard_redirect<D, F>(auth: Signal<AuthState>, decide: D, navigate: F)
where
    D: Fn(&AuthState) -> GuardDecision + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::RedirectTo(route) = auth.with(&decide) {
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
