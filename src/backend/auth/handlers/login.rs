/**
 * Login Handler
 *
 * Implements POST /login.
 *
 * # Authentication Process
 *
 * 1. Trim the fields, lowercase the email
 * 2. Reject if either is missing or empty
 * 3. Look up the user by email
 * 4. Verify the password against the stored bcrypt hash
 *
 * # Security Notes
 *
 * - Unknown email and wrong password return byte-identical 401 bodies so
 *   callers cannot enumerate registered emails
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{normalized, normalized_email, LoginRequest, LoginResponse};
use crate::backend::auth::users::find_user_by_email;
use crate::backend::error::ApiError;

/// One message for both failure causes. Must stay identical.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// TODO: replace with a signed, expiring session token once real session
// issuance is added.
const PLACEHOLDER_TOKEN: &str = "dummy-token";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field or storage failure
/// * `401 Unauthorized` - unknown email or wrong password
pub async fn login(
    State(pool): State<PgPool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (
        normalized_email(request.email.as_deref()),
        normalized(request.password.as_deref()),
    ) else {
        return Err(ApiError::validation("Email and password required"));
    };

    tracing::info!("Login request for {}", email);

    let user = find_user_by_email(&pool, &email)
        .await
        .map_err(|e| ApiError::storage("Login failed", e))?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", email);
            ApiError::auth(INVALID_CREDENTIALS)
        })?;

    let valid = verify(&password, &user.password_hash)
        .map_err(|e| ApiError::storage("Login failed", e))?;
    if !valid {
        tracing::warn!("Invalid password for {}", email);
        return Err(ApiError::auth(INVALID_CREDENTIALS));
    }

    tracing::info!("User logged in: {}", user.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        name: user.name,
        email: user.email,
        token: PLACEHOLDER_TOKEN.to_string(),
    }))
}
