mod config;
mod routes;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "kokmaisa host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let leptos_options = leptos::prelude::get_configuration(None)
        .map_err(|e| HostError::Leptos(e.to_string()))?
        .leptos_options;

    tracing::info!(api_base = %config.api.base_url, "serving KokMaisa front-end");
    let app = routes::app(leptos_options, config.api.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "kokmaisa listening");
    axum::serve(listener, app).await?;
    Ok(())
}
