/**
 * Admin Notifier
 *
 * Sends one plain-text email to the administrator for each contact
 * submission. STARTTLS relay with username/password credentials; the
 * From and To mailboxes are fixed at construction.
 */

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::backend::server::config::SmtpConfig;

const NOTIFICATION_SUBJECT: &str = "New Contact Message";

/// Errors from building or sending a notification
///
/// Never fatal to a request: the contact handler catches these and
/// downgrades its response to 202.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Sender or admin address failed to parse
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    /// Message could not be assembled
    #[error("failed to build mail: {0}")]
    Build(#[from] lettre::error::Error),
    /// Relay session failed
    #[error("mail relay error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Mailer for admin notifications
///
/// Cheap to clone; the underlying transport shares its connection pool.
#[derive(Clone)]
pub struct AdminMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    admin: Mailbox,
}

impl AdminMailer {
    /// Build the mailer from relay configuration
    ///
    /// Parses both mailboxes and sets up the STARTTLS transport. No
    /// connection is made until the first send.
    pub fn new(config: &SmtpConfig) -> Result<Self, NotificationError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender: config.sender.parse()?,
            admin: config.admin_email.parse()?,
        })
    }

    /// Notify the administrator of a new contact message
    pub async fn notify_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), NotificationError> {
        let mail = Message::builder()
            .from(self.sender.clone())
            .to(self.admin.clone())
            .subject(NOTIFICATION_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(notification_body(name, email, message))?;

        self.transport.send(mail).await?;
        tracing::debug!("Admin notification sent for {}", email);
        Ok(())
    }
}

fn notification_body(name: &str, email: &str, message: &str) -> String {
    format!("From: {name} <{email}>\n\n{message}")
}
