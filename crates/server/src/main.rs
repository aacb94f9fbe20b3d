//! Teaweb Server - Tea storefront JSON backend.
//!
//! Serves the static product catalog, computes order quotes, and persists
//! newsletter signups and orders to an embedded `SQLite` store.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in / JSON out
//! - Immutable in-process catalog, built once at startup
//! - `SQLite` via sqlx for orders and newsletter subscriptions
//! - Optional static file serving for the web front end

#![cfg_attr(not(test), forbid(unsafe_code))]

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use teaweb_server::catalog::Catalog;
use teaweb_server::config::ServerConfig;
use teaweb_server::state::AppState;
use teaweb_server::{db, routes};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "teaweb_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize database connection pool and schema
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");
    tracing::info!("Database ready");

    // Build application state; the catalog is fixed for the process lifetime
    let catalog = Catalog::builtin();
    tracing::info!(products = catalog.products().len(), "Catalog loaded");
    let state = AppState::new(config, pool, catalog);

    // Build router; the static front end (if configured) is the fallback
    // for any path the API does not claim
    let mut app = routes::app(state.clone());
    if let Some(static_dir) = &state.config().static_dir {
        app = app.fallback_service(ServeDir::new(static_dir));
        tracing::info!(dir = %static_dir, "Serving static front end");
    }
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = state.config().socket_addr();
    tracing::info!("teaweb listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
