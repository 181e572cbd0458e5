/**
 * Router Configuration
 *
 * Combines all handlers into a single Axum router with permissive CORS
 * (the frontend is served from a different origin) and a 404 fallback.
 *
 * # Routes
 *
 * - `POST /register` - User registration
 * - `POST /login` - Credential verification
 * - `POST /contact` - Contact message submission
 * - `GET /users` - User listing
 * - `GET /contacts` - Contact message listing, newest first
 */

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::backend::auth::handlers::{get_users, login, register};
use crate::backend::contact::handlers::{get_contacts, submit_contact};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/contact", post(submit_contact))
        .route("/users", get(get_users))
        .route("/contacts", get(get_contacts))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(CorsLayer::permissive())
        .with_state(state)
}
