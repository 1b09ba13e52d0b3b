mod config;
mod routes;
mod shutdown;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client init failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("remindme=info,tower_http=info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "remindme exited with error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::ServerConfig::from_env()?;
    let addr = config.addr();

    match config.api_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api to upstream"),
        None => tracing::warn!("API_UPSTREAM_URL not set; /api requests will return 503"),
    }
    if !config.index_html().is_file() {
        tracing::warn!(static_dir = %config.static_dir.display(), "index.html not found; build the client bundle first");
    }

    let app = routes::app(state::AppState::new(config)?);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "remindme listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("remindme stopped");
    Ok(())
}
