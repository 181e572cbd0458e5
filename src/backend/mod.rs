//! Backend Module
//!
//! This module contains all server-side code for the Nexcent backend.
//! It provides an Axum HTTP server backed by PostgreSQL, with an outbound
//! SMTP notification path for contact messages.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration loading, startup, application state
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - User persistence, registration and login handlers
//! - **`contact`** - Contact-message persistence and handlers
//! - **`mail`** - Admin notification over an authenticated SMTP relay
//! - **`error`** - Request error taxonomy and HTTP response conversion
//!
//! # Request Model
//!
//! Every request is stateless and independent. Handlers validate input,
//! run a single SQL statement against the shared pool, and return a JSON
//! response. Uniqueness and consistency are delegated to PostgreSQL's own
//! constraint enforcement; there is no in-process locking, retry, or
//! cross-request ordering.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. `ApiError` implements
//! `IntoResponse`, so every failure surfaces directly to the caller as a
//! JSON body with a human-readable message and, where available, the
//! underlying error text. A failed admin notification is the one special
//! case: the contact message is already persisted, so the handler downgrades
//! the response to 202 instead of failing the request.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Contact message handling
pub mod contact;

/// Admin mail notification
pub mod mail;

/// Request error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::init::create_app;
