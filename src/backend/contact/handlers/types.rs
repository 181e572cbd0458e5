/**
 * Contact Handler Types
 *
 * Request and response types for the contact endpoints.
 */

use serde::{Deserialize, Serialize};

/// Contact submission request
///
/// Either `authEmail` is present (sender resolved from the stored user,
/// any client-supplied `name`/`email` ignored) or the guest fields are
/// required.
#[derive(Debug, Deserialize, Serialize)]
pub struct ContactRequest {
    /// Message body
    #[serde(default)]
    pub message: Option<String>,
    /// Email of a registered user submitting while logged in
    #[serde(default, rename = "authEmail")]
    pub auth_email: Option<String>,
    /// Guest display name
    #[serde(default)]
    pub name: Option<String>,
    /// Guest email address
    #[serde(default)]
    pub email: Option<String>,
}

/// Contact submission response
///
/// `error` carries the notification failure text on the 202 path and is
/// omitted on plain success.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Underlying notification error, if the mail send failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
