/**
 * User Listing Handler
 *
 * Implements GET /users. Returns every registered user as the
 * client-safe projection; password hashes are never selected. No
 * pagination, filtering, or access control.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::backend::auth::users::{list_users, UserRecord};
use crate::backend::error::ApiError;

/// User listing handler
pub async fn get_users(State(pool): State<PgPool>) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let users = list_users(&pool)
        .await
        .map_err(|e| ApiError::storage("Error listing users", e))?;
    Ok(Json(users))
}
