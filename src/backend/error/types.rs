/**
 * Request Error Types
 *
 * This module defines the errors HTTP handlers can surface to callers.
 * Each variant carries enough context to render the JSON error body and
 * maps to a fixed HTTP status code.
 *
 * # Status Mapping
 *
 * - `Validation` - 400 Bad Request
 * - `DuplicateUser` - 400 Bad Request
 * - `Auth` - 401 Unauthorized
 * - `Storage` - 400 Bad Request (no distinction between constraint
 *   violation and connection failure)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by HTTP handlers
///
/// # Usage
///
/// ```rust
/// use nexcent_backend::backend::error::ApiError;
///
/// let err = ApiError::validation("Message is required");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required field
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Registration against an email that already has an account
    #[error("User already exists!")]
    DuplicateUser,

    /// Unknown user or failed credential verification
    ///
    /// The message is identical for "no such user" and "wrong password"
    /// so callers cannot probe which emails are registered.
    #[error("{message}")]
    Auth {
        /// Human-readable error message
        message: String,
    },

    /// Any other persistence failure
    #[error("{message}: {detail}")]
    Storage {
        /// Human-readable error message
        message: String,
        /// Underlying error text
        detail: String,
    },
}

impl ApiError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a new storage error wrapping an underlying failure
    pub fn storage(message: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Storage {
            message: message.into(),
            detail: source.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::DuplicateUser | Self::Storage { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Auth { .. } => StatusCode::UNAUTHORIZED,
        }
    }

    /// Get the message shown to the caller
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::DuplicateUser => "User already exists!".to_string(),
            Self::Auth { message } => message.clone(),
            Self::Storage { message, .. } => message.clone(),
        }
    }

    /// Get the underlying error text, if any
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Storage { detail, .. } => Some(detail.clone()),
            _ => None,
        }
    }
}
