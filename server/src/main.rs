use std::sync::Arc;

use anyhow::{Context, Result};
use todo_core::FileStore;
use todo_server::{app, config::Config, shutdown::shutdown_signal};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    let store = Arc::new(FileStore::new(&config.records_file));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        bind_addr = %config.bind_addr,
        records_file = %config.records_file.display(),
        "todo server listening"
    );

    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("todo_server=debug,todo_core=debug,tower_http=info")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
