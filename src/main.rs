mod config;
mod routes;

use leptos::prelude::get_configuration;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "library-store failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let cfg = config::ServerConfig::from_env()?;
    let leptos_options = get_configuration(None)
        .map_err(|e| StartupError::Leptos(e.to_string()))?
        .leptos_options;

    tracing::info!(
        books_api_url = %cfg.api.books_api_url,
        backend_api_url = %cfg.api.backend_api_url,
        "client API endpoints"
    );

    let app = routes::app(leptos_options, cfg.api);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port)).await?;

    tracing::info!(port = cfg.port, "library-store listening");
    axum::serve(listener, app).await?;
    Ok(())
}
