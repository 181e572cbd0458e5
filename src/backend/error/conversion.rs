/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses so handlers can return it
 * directly with the `?` operator.
 *
 * # Response Format
 *
 * Errors are returned as JSON:
 *
 * ```json
 * { "message": "Error creating user", "error": "..." }
 * ```
 *
 * The `error` field is present only when an underlying error text is
 * available (storage failures).
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut body = serde_json::json!({ "message": self.message() });
        if let Some(detail) = self.detail() {
            body["error"] = serde_json::Value::String(detail);
        }

        (status, Json(body)).into_response()
    }
}
