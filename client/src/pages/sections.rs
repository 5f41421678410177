//! Role-specific work areas. Their data views are served by the REST API
//! and render here as entry points only.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::routes::AppRoute;

pub(crate) fn section_intro(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Farms => "Register farms and keep their boundaries and contacts up to date.",
        AppRoute::Pastures => "Track pastures, grazing rotations and field boundaries.",
        AppRoute::Drones => "Manage drones and plan survey flights over your pastures.",
        AppRoute::Biomass => "Follow biomass estimates and growth trends per pasture.",
        AppRoute::Advisory => "See the farms you advise and respond to their requests.",
        AppRoute::Chat => "Ask the assistant about grazing, soil and crop conditions.",
        AppRoute::Login
        | AppRoute::Register
        | AppRoute::ForgotPassword
        | AppRoute::ResetPassword
        | AppRoute::Home
        | AppRoute::Profile => "",
    }
}

#[component]
pub fn SectionPage(route: AppRoute) -> impl IntoView {
    view! {
        <div class="section-page">
            <NavBar active=route/>
            <main class="section-page__body">
                <h1>{route.title()}</h1>
                <p class="section-page__intro">{section_intro(route)}</p>
            </main>
        </div>
    }
}
