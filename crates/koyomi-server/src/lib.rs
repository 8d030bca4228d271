//! # koyomi-server
//!
//! REST API for the koyomi calendar service: monthly calendars annotated
//! with national holidays and rokuyo, yearly holiday lists, and CRUD for
//! user events.
//!
//! The binary wires [`ServerConfig`], [`logging::init`] and [`run`]
//! together; the pieces are public so that tests and embedders can build the
//! router directly with [`rest::create_router`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use anyhow::Context;
use koyomi_events::{EventRepository, InMemoryEventRepository};
use tracing::{error, info, warn};

pub mod config;
pub mod error;
pub mod logging;
pub mod rest;
pub mod state;

pub use config::{LogFormat, ServerConfig};
pub use error::ServerError;
pub use state::AppState;

/// Open the event store described by `config`.
///
/// PostgreSQL when `database_url` is set (migrating first if
/// `run_migrations`), otherwise a process-local store.
pub async fn connect_repository(config: &ServerConfig) -> anyhow::Result<Arc<dyn EventRepository>> {
    match config.database_url.as_deref() {
        #[cfg(feature = "postgres")]
        Some(url) => {
            let repo = koyomi_events::PostgresEventRepository::connect(url, config.max_connections)
                .await
                .context("connecting to the event database")?;
            if config.run_migrations {
                repo.migrate().await.context("migrating the event database")?;
            }
            Ok(Arc::new(repo))
        }
        #[cfg(not(feature = "postgres"))]
        Some(_) => {
            warn!("database_url is set but PostgreSQL support is not compiled in; events are kept in memory");
            Ok(Arc::new(InMemoryEventRepository::new()))
        }
        None => {
            warn!("no database_url configured; events are kept in memory and lost on exit");
            Ok(Arc::new(InMemoryEventRepository::new()))
        }
    }
}

/// Run the server until Ctrl-C.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let repo = connect_repository(&config).await?;
    let state = Arc::new(AppState::new(repo, config.locale));
    let app = rest::create_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.rest_addr)
        .await
        .with_context(|| format!("binding {}", config.rest_addr))?;
    info!(addr = %config.rest_addr, locale = %config.locale, "koyomi server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            error!(error = %e, "cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
