//! Contact Module
//!
//! Contact-message persistence and the handlers for submitting and
//! listing messages.
//!
//! # Module Structure
//!
//! ```text
//! contact/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - ContactMessage model and database operations
//! └── handlers/   - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs  - Request/response types
//!     ├── submit.rs - Submission handler (guest or authenticated)
//!     └── list.rs   - Listing handler
//! ```
//!
//! # Submission Flow
//!
//! A submission either carries `authEmail` (sender resolved from the
//! stored user) or explicit guest `name`/`email`. The message is always
//! persisted before the admin notification is attempted; a failed
//! notification downgrades the response to 202 but never loses the
//! message.

/// Contact message model and database operations
pub mod db;

/// HTTP handlers for contact endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use db::ContactMessage;
pub use handlers::{get_contacts, submit_contact};
