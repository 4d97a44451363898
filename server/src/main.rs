mod config;
mod error;
mod routes;
mod state;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // `.env` is optional; real environment variables take precedence.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = ServerConfig::from_env()?;
    let leptos_conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;

    let addr = config.addr;
    let session_gate = config.session_gate;
    let state = state::AppState::new(leptos_conf.leptos_options, config);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, session_gate, "gatehouse listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
