//! Nexcent Backend - Main Library
//!
//! Backend for the Nexcent site: user registration and login plus a
//! contact-message form, backed by PostgreSQL with an outbound email
//! notification to the site administrator.
//!
//! # Overview
//!
//! The server exposes five JSON endpoints:
//!
//! - `POST /register` - Create a user account
//! - `POST /login` - Verify credentials
//! - `POST /contact` - Submit a contact message (guest or authenticated)
//! - `GET /users` - List registered users
//! - `GET /contacts` - List contact messages, newest first
//!
//! # Module Structure
//!
//! All server-side code lives under the `backend` module:
//!
//! - **`backend::server`** - Configuration, startup, application state
//! - **`backend::auth`** - User persistence, registration, login
//! - **`backend::contact`** - Contact-message persistence and submission
//! - **`backend::mail`** - Admin notification over SMTP
//! - **`backend::routes`** - Router assembly
//! - **`backend::error`** - Request error taxonomy
//!
//! # Usage
//!
//! ```rust,no_run
//! use nexcent_backend::backend::server::config::ServerConfig;
//! use nexcent_backend::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Backend server-side code
pub mod backend;
