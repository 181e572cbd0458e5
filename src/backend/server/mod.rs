//! Server Module
//!
//! This module contains the code that turns configuration into a running
//! Axum application.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── config.rs  - Configuration loading from the environment
//! ├── state.rs   - AppState and FromRef implementations
//! └── init.rs    - Pool connection, schema initialization, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env()` reads database
//!    and mail-relay settings once at startup.
//! 2. **Database Connection**: the PostgreSQL pool is connected; failure is
//!    fatal since every endpoint needs storage.
//! 3. **Schema Initialization**: the `users` and `contacts` tables are
//!    created if absent.
//! 4. **Mailer Construction**: the SMTP transport and fixed From/To
//!    mailboxes are built from configuration.
//! 5. **Router Creation**: routes and middleware are assembled around the
//!    shared `AppState`.

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ServerConfig, SmtpConfig};
pub use init::create_app;
pub use state::AppState;
