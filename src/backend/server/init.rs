/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum application:
 * database connection, schema initialization, mailer construction, and
 * router assembly.
 *
 * # Failure Model
 *
 * Both external collaborators are fixed at startup, so a database that
 * cannot be reached or a relay address that cannot be parsed is fatal
 * here. Send-time mail failures are handled per request by the contact
 * handler and never reach this module.
 */

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::mail::{AdminMailer, NotificationError};
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Errors that abort server startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("mail relay configuration error: {0}")]
    Mail(#[from] NotificationError),
}

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Connect the PostgreSQL pool
/// 2. Ensure the `users` and `contacts` tables exist
/// 3. Build the admin mailer from the relay configuration
/// 4. Assemble the router around the shared state
///
/// # Errors
///
/// Returns `StartupError` if the database is unreachable, the schema
/// statements fail, or the relay configuration is invalid.
pub async fn create_app(config: ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Connecting to database");
    let db_pool = PgPool::connect(&config.database_url).await?;

    init_schema(&db_pool).await?;
    tracing::info!("Database schema ready");

    let mailer = AdminMailer::new(&config.smtp)?;
    tracing::info!(
        "Admin mailer configured for {} via {}",
        config.smtp.admin_email,
        config.smtp.host
    );

    let state = AppState { db_pool, mailer };
    Ok(create_router(state))
}

/// Ensure the two tables exist
///
/// Idempotent, runs on every startup. Email uniqueness lives here as a
/// storage-layer constraint; nothing is enforced on contacts beyond
/// NOT NULL.
async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            message TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
