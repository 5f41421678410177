//! Root application component: composition root for the session and router.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{PublicOnly, RouteGuard};
use crate::config::{API_BASE_META, ApiConfig};
use crate::net::api::HttpCredentialStore;
use crate::net::token::LocalStorageTokenHolder;
use crate::pages::{
    home::HomePage,
    login::LoginPage,
    password_reset::{ForgotPasswordPage, ResetPasswordPage},
    profile::ProfilePage,
    register::RegisterPage,
    sections::SectionPage,
};
use crate::routes::AppRoute;
use crate::state::session::{AppSession, Session};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api` is written into the head so the browser build picks up the same
/// API base URL after hydration.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    let api_base = api.base_url.clone();
    provide_context(api);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
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
/// Builds the single `Session`, provides it to the page tree and starts the
/// session restore in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_environment);
    let session: AppSession = Session::new(HttpCredentialStore::new(api), LocalStorageTokenHolder);
    provide_context(session.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/kokmaisa.css"/>
        <Title text="KokMaisa"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment(AppRoute::Login.segment())
                    view=|| view! { <PublicOnly><LoginPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment(AppRoute::Register.segment())
                    view=|| view! { <PublicOnly><RegisterPage/></PublicOnly> }
                />
                <Route path=StaticSegment(AppRoute::ForgotPassword.segment()) view=ForgotPasswordPage/>
                <Route path=StaticSegment(AppRoute::ResetPassword.segment()) view=ResetPasswordPage/>
                <Route
                    path=StaticSegment(AppRoute::Home.segment())
                    view=|| view! { <RouteGuard route=AppRoute::Home><HomePage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment(AppRoute::Profile.segment())
                    view=|| view! { <RouteGuard route=AppRoute::Profile><ProfilePage/></RouteGuard> }
                />
                <Route path=StaticSegment(AppRoute::Farms.segment()) view=|| guarded_section(AppRoute::Farms)/>
                <Route path=StaticSegment(AppRoute::Pastures.segment()) view=|| guarded_section(AppRoute::Pastures)/>
                <Route path=StaticSegment(AppRoute::Drones.segment()) view=|| guarded_section(AppRoute::Drones)/>
                <Route path=StaticSegment(AppRoute::Biomass.segment()) view=|| guarded_section(AppRoute::Biomass)/>
                <Route path=StaticSegment(AppRoute::Advisory.segment()) view=|| guarded_section(AppRoute::Advisory)/>
                <Route path=StaticSegment(AppRoute::Chat.segment()) view=|| guarded_section(AppRoute::Chat)/>
            </Routes>
        </Router>
    }
}

fn guarded_section(route: AppRoute) -> impl IntoView {
    view! {
        <RouteGuard route=route>
            <SectionPage route=route/>
        </RouteGuard>
    }
}
