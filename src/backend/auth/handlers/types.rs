/**
 * Account Handler Types
 *
 * Request and response types for the account endpoints, plus the input
 * normalization helpers shared with the contact handlers.
 *
 * All request fields are optional at the serde layer; handlers decide
 * what is required so a missing field produces the endpoint's own 400
 * message instead of a deserialization rejection.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Plain-text password (hashed before storage)
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Plain-text password (verified against the stored hash)
    #[serde(default)]
    pub password: Option<String>,
}

/// Confirmation-only response body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Successful login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Display name of the authenticated user
    pub name: String,
    /// Email of the authenticated user
    pub email: String,
    /// Session token
    pub token: String,
}

/// Trim a request field, treating empty as absent
pub fn normalized(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trim and lowercase an email field, treating empty as absent
///
/// Lowercasing at the request edge keeps a single canonical form in the
/// database and makes the UNIQUE constraint case-insensitive in practice.
pub fn normalized_email(value: Option<&str>) -> Option<String> {
    normalized(value).map(|email| email.to_lowercase())
}
