//! Account Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /register - Create a user account
//! - **`login`** - POST /login - Verify credentials
//! - **`get_users`** - GET /users - List registered users

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// User listing handler
pub mod list;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

// Re-export handlers
pub use list::get_users;
pub use login::login;
pub use register::register;
