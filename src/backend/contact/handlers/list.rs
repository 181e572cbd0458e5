/**
 * Contact Listing Handler
 *
 * Implements GET /contacts. Returns every stored message, newest first.
 * No pagination, filtering, or access control.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::backend::contact::db::{list_contacts, ContactMessage};
use crate::backend::error::ApiError;

/// Contact listing handler
pub async fn get_contacts(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let contacts = list_contacts(&pool)
        .await
        .map_err(|e| ApiError::storage("Error listing messages", e))?;
    Ok(Json(contacts))
}
