//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders and ships the front-end: Leptos SSR for every app
//! route, the compiled WASM/CSS bundle under `/pkg`, and `/healthz`. All data
//! requests go from the browser straight to the KokMaisa REST API.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use kokmaisa_client::app::{App, shell};
use kokmaisa_client::config::ApiConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Operational endpoints that do not involve the Leptos app.
fn ops_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: ops routes, Leptos SSR, and static assets.
pub fn app(leptos_options: LeptosOptions, api: ApiConfig) -> Router {
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), api.clone())
        })
        .with_state(leptos_options);

    ops_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
