//! Landing page for signed-in users.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::types::{AccountType, User};
use crate::routes::{AppRoute, nav_for};
use crate::state::session::AppSession;

pub(crate) fn greeting(user: &User) -> String {
    let first = user.full_name.split_whitespace().next().unwrap_or(user.email.as_str());
    format!("Welcome back, {first}")
}

pub(crate) fn role_summary(role: AccountType) -> &'static str {
    match role {
        AccountType::Farmer => "Manage your farms, pastures and drone flights, and follow biomass on your fields.",
        AccountType::Agronomist => "Review biomass data and advise the farmers who work with you.",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = session.watch();

    let heading = {
        let auth = auth.clone();
        move || auth.with(|s| s.user.as_ref().map(greeting).unwrap_or_default())
    };
    let summary = {
        let auth = auth.clone();
        move || auth.with(|s| s.user.as_ref().map(|u| role_summary(u.account_type)).unwrap_or_default())
    };
    let shortcuts = move || {
        auth.with(|s| s.user.as_ref().map(|u| nav_for(u.account_type)))
            .unwrap_or_default()
            .into_iter()
            .filter(|route| *route != AppRoute::Home)
            .map(|route| {
                view! {
                    <a class="home-page__tile" href=route.path()>
                        {route.title()}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="home-page">
            <NavBar active=AppRoute::Home/>
            <main class="home-page__body">
                <h1>{heading}</h1>
                <p class="home-page__summary">{summary}</p>
                <div class="home-page__tiles">{shortcuts}</div>
            </main>
        </div>
    }
}
