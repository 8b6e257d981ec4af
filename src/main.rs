use anyhow::Context;
use axum::ServiceExt;
use blogpost::config::Config;
use blogpost::state::State;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let blogs = config.open_repository().await?;
    tracing::info!(backend = ?config.backend, store = ?config.store_path, "blog store ready");

    let app = blogpost::app(std::sync::Arc::new(State::new(blogs)));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("could not bind {}", config.addr))?;
    tracing::info!(addr = %config.addr, "listening");

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("error serving app")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(err) => {
            tracing::error!(error = %err, "could not listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}
