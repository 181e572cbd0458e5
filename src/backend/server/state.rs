/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits Axum uses for state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding the two fixed
 * external collaborators:
 *
 * - The PostgreSQL connection pool
 * - The admin mailer (SMTP transport plus From/To mailboxes)
 *
 * Both are cheap to clone (internally reference counted), so the state is
 * cloned per request by the router. There is no other shared in-process
 * mutable state.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part of the
 * state they need:
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::PgPool;
 *
 * async fn handler(State(pool): State<PgPool>) {
 *     // Query the database
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::mail::AdminMailer;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,
    /// Admin notification mailer
    pub mailer: AdminMailer,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for AdminMailer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}
