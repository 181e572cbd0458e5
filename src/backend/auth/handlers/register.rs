/**
 * Registration Handler
 *
 * Implements POST /register.
 *
 * # Registration Process
 *
 * 1. Trim all fields, lowercase the email
 * 2. Reject if any field is missing or empty
 * 3. Reject if the email already has an account
 * 4. Hash the password with bcrypt (fresh salt per call)
 * 5. Insert the user and return 201
 *
 * Storage failures, including a duplicate slipping past the pre-check
 * into the UNIQUE constraint, all surface as the same generic 400 with
 * the underlying error text.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{
    normalized, normalized_email, MessageResponse, RegisterRequest,
};
use crate::backend::auth::users::{create_user, find_user_by_email};
use crate::backend::error::ApiError;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field, duplicate email, or storage failure
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (Some(name), Some(email), Some(password)) = (
        normalized(request.name.as_deref()),
        normalized_email(request.email.as_deref()),
        normalized(request.password.as_deref()),
    ) else {
        return Err(ApiError::validation("Name, email and password required"));
    };

    tracing::info!("Register request for {}", email);

    let existing = find_user_by_email(&pool, &email)
        .await
        .map_err(|e| ApiError::storage("Error creating user", e))?;
    if existing.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(ApiError::DuplicateUser);
    }

    let password_hash =
        hash(&password, DEFAULT_COST).map_err(|e| ApiError::storage("Error creating user", e))?;

    let user = create_user(&pool, &name, &email, &password_hash)
        .await
        .map_err(|e| ApiError::storage("Error creating user", e))?;

    tracing::info!("User registered: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("User {} registered successfully!", user.email),
        }),
    ))
}
