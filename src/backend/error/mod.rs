//! Request Error Module
//!
//! This module defines the error taxonomy for HTTP handlers and its
//! conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Taxonomy
//!
//! - `Validation` - missing or empty required field (400)
//! - `DuplicateUser` - registration against an existing email (400)
//! - `Auth` - unknown user, bad password, or unresolved login email (401)
//! - `Storage` - any other persistence failure (400, generic)
//!
//! Mail-notification failures are deliberately NOT part of this taxonomy:
//! they downgrade an already-persisted contact submission to a 202 response
//! instead of failing it. See [`crate::backend::mail::NotificationError`].

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
