mod config;
mod routes;
mod state;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("route catalog: {0}")]
    Catalog(#[from] seo::ConfigurationError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "arena failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    // Refuse to serve pages whose metadata cannot be resolved.
    let catalog = seo::routes::catalog()?;
    tracing::info!(routes = catalog.len(), base_url = %catalog.site().base_url, "route catalog built");

    let state = state::AppState::new(config, catalog);
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, cookie_secure = config.cookie_secure, "arena listening");
    axum::serve(listener, app).await?;
    Ok(())
}
