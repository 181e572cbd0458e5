//! Mail Module
//!
//! Outbound email to the fixed administrator address over an
//! authenticated SMTP relay session, built with lettre.
//!
//! The transport and both mailboxes are constructed once at startup from
//! [`crate::backend::server::config::SmtpConfig`]; per-send failures are
//! surfaced as [`NotificationError`] to the contact handler, which
//! downgrades the response instead of failing the request.

mod notifier;

pub use notifier::{AdminMailer, NotificationError};
