/**
 * Contact Submission Handler
 *
 * Implements POST /contact.
 *
 * # Submission Process
 *
 * 1. Require a non-empty message
 * 2. Resolve the sender: `authEmail` looks up the stored user (401 if
 *    unknown, nothing persisted); otherwise guest `name`/`email` are
 *    required
 * 3. Persist the message
 * 4. Notify the administrator; on failure the message stays persisted
 *    and the response downgrades to 202 with the error text
 *
 * The notification is never retried or queued.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{normalized, normalized_email};
use crate::backend::auth::users::find_user_by_email;
use crate::backend::contact::db::insert_contact;
use crate::backend::contact::handlers::types::{ContactRequest, ContactResponse};
use crate::backend::error::ApiError;
use crate::backend::mail::AdminMailer;

/// Contact submission handler
///
/// # Errors
///
/// * `400 Bad Request` - missing message, missing guest fields, or
///   storage failure
/// * `401 Unauthorized` - `authEmail` does not match a registered user
pub async fn submit_contact(
    State(pool): State<PgPool>,
    State(mailer): State<AdminMailer>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let Some(message) = normalized(request.message.as_deref()) else {
        return Err(ApiError::validation("Message is required"));
    };

    let (name, email) = match normalized_email(request.auth_email.as_deref()) {
        Some(auth_email) => {
            // Authenticated branch: the stored record wins over anything
            // the client supplied.
            let user = find_user_by_email(&pool, &auth_email)
                .await
                .map_err(|e| ApiError::storage("Error saving message", e))?
                .ok_or_else(|| {
                    tracing::warn!("Contact with unknown authEmail: {}", auth_email);
                    ApiError::auth("Invalid logged-in user")
                })?;
            (user.name, user.email)
        }
        None => {
            let (Some(name), Some(email)) = (
                normalized(request.name.as_deref()),
                normalized_email(request.email.as_deref()),
            ) else {
                return Err(ApiError::validation("Name & Email required for guests"));
            };
            (name, email)
        }
    };

    let saved = insert_contact(&pool, &name, &email, &message)
        .await
        .map_err(|e| ApiError::storage("Error saving message", e))?;
    tracing::info!("Contact message {} saved from {}", saved.id, saved.email);

    match mailer.notify_contact(&name, &email, &message).await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(ContactResponse {
                message: "Your message has been sent to admin!".to_string(),
                error: None,
            }),
        )),
        Err(e) => {
            tracing::warn!("Admin notification failed for message {}: {}", saved.id, e);
            Ok((
                StatusCode::ACCEPTED,
                Json(ContactResponse {
                    message: "Message saved, but email failed!".to_string(),
                    error: Some(e.to_string()),
                }),
            ))
        }
    }
}
