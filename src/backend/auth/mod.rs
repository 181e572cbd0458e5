//! Authentication Module
//!
//! This module handles user accounts: persistence, registration, and
//! credential verification.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types and input normalization
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Credential verification handler
//!     └── list.rs     - User listing handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (fresh salt per registration)
//! - Password hashes are never selected for listing responses
//! - Login failures return one identical message for "no such user" and
//!   "wrong password"

/// User data model and database operations
pub mod users;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use handlers::{get_users, login, register};
pub use users::{User, UserRecord};
