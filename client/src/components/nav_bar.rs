//! Top navigation bar with role-gated links.

use leptos::prelude::*;

use crate::routes::{AppRoute, nav_for};
use crate::state::session::AppSession;

/// Navigation for the signed-in user. Renders nothing without a session.
#[component]
pub fn NavBar(active: AppRoute) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = session.watch();

    let links = {
        let auth = auth.clone();
        move || {
            auth.with(|state| state.user.as_ref().map(|u| nav_for(u.account_type)))
                .unwrap_or_default()
                .into_iter()
                .map(|route| {
                    let class = if route == active { "nav-bar__link nav-bar__link--active" } else { "nav-bar__link" };
                    view! { <a class=class href=route.path()>{route.title()}</a> }
                })
                .collect::<Vec<_>>()
        }
    };
    let identity = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|u| format!("{} ({})", u.full_name, u.account_type.label()))
                .unwrap_or_default()
        })
    };
    let on_logout = move |_| session.logout();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"KokMaisa"</span>
            <div class="nav-bar__links">{links}</div>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__self">{identity}</span>
            <button class="btn nav-bar__logout" on:click=on_logout title="Log out">
                "Log out"
            </button>
        </nav>
    }
}
