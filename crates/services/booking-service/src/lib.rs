//! Booking Service Library
//!
//! HTTP backend for barbershop bookings: shops, their operators and service
//! catalog, and customer appointments. The binary in `main.rs` wraps
//! [`run_server`] and [`run_migrations`].

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::BookingServiceConfig;
use crate::infra::Database;

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: &BookingServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server until Ctrl-C.
pub async fn run_server(config: BookingServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database (applies pending migrations)
    let db = Database::connect(&config.database).await?;

    let state = AppState::from_connection(db.get_connection());
    let app = create_router(state, &config.cors);

    let listener = TcpListener::bind(config.service.addr()).await?;
    info!(
        service = %config.service.service_name,
        addr = %listener.local_addr()?,
        "Booking service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Booking service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
