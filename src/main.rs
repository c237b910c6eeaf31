//! Expense API - expense tracking REST service
//!
//! Serves create/list/show/update of expenses stored in PostgreSQL.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expense_api::api::{self, AppState};
use expense_api::config::{Config, LogFormat};
use expense_api::db;
use expense_api::services::ExpenseService;
use expense_api::store::PgExpenseRepository;

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "expense_api=debug,tower_http=debug".into()),
    );

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("Starting expense API");
    tracing::info!("Connecting to database...");

    let pool = match db::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Connect database error: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = db::verify_connection(&pool).await {
        tracing::error!("Database is not reachable: {}", e);
        return Err(e.into());
    }

    if let Err(e) = db::ensure_schema(&pool).await {
        tracing::error!("Can't create table: {}", e);
        return Err(e.into());
    }

    tracing::info!("Database connected successfully");

    let repository = Arc::new(PgExpenseRepository::new(pool.clone()));
    let state = AppState::new(ExpenseService::new(repository), config.auth_token.clone());
    if state.auth_token.is_none() {
        tracing::warn!("AUTH_TOKEN is not set; every /expenses request will be rejected");
    }

    let app = api::build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_rx.await.ok();
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            // Server stopped on its own, which only happens on error
            result??;
        }
        _ = shutdown_signal() => {
            shutdown_tx.send(()).ok();
            match tokio::time::timeout(config.shutdown_grace, &mut server).await {
                Ok(result) => result??,
                Err(_) => {
                    tracing::warn!(
                        "In-flight requests still running after {:?}, terminating",
                        config.shutdown_grace
                    );
                    server.abort();
                }
            }
        }
    }

    // Cleanup
    tracing::info!("Server shutting down...");
    pool.close().await;
    tracing::info!("Database connections closed. Goodbye!");

    Ok(())
}

/// Shutdown signal handler for graceful shutdown
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
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}
