//! Contact Handlers Module
//!
//! HTTP handlers for the contact endpoints.
//!
//! # Handlers
//!
//! - **`submit_contact`** - POST /contact - Submit a contact message
//! - **`get_contacts`** - GET /contacts - List messages, newest first

/// Request and response types
pub mod types;

/// Submission handler
pub mod submit;

/// Listing handler
pub mod list;

// Re-export commonly used types
pub use types::{ContactRequest, ContactResponse};

// Re-export handlers
pub use list::get_contacts;
pub use submit::submit_contact;
