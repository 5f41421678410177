//! Route guard wrappers applied around every page in the router.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::session::{AppSession, AuthState};
use crate::util::auth::{GuardDecision, guard_decision, install_guard_redirect, public_only_decision, route_content_visible};

/// Neutral placeholder shown while the session restore runs.
#[component]
pub fn SessionPlaceholder() -> impl IntoView {
    view! {
        <div class="session-placeholder" aria-busy="true">
            <span class="session-placeholder__spinner"></span>
        </div>
    }
}

/// Renders `children` only when the session admits `route`.
///
/// Redirects to login without a session and home on a role mismatch. While
/// the session is restoring it shows the placeholder and never redirects.
#[component]
pub fn RouteGuard(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth: Signal<AuthState> = session.watch().into();
    let required = route.required_roles();

    install_guard_redirect(auth, move |state| guard_decision(state, required), use_navigate());

    view! {
        <Show
            when=move || auth.with(|state| route_content_visible(state, route))
            fallback=|| view! { <SessionPlaceholder/> }
        >
            {children()}
        </Show>
    }
}

/// Wrapper for login/registration pages: a signed-in user is sent home.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth: Signal<AuthState> = session.watch().into();

    install_guard_redirect(auth, public_only_decision, use_navigate());

    view! {
        <Show
            when=move || auth.with(public_only_decision) == GuardDecision::Render
            fallback=|| view! { <SessionPlaceholder/> }
        >
            {children()}
        </Show>
    }
}
