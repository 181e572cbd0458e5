/**
 * Database Operations for Contact Messages
 *
 * Persistence for the `contacts` table. Rows are insert-only; listing
 * orders by descending id so the newest message comes first.
 */

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Contact message struct representing a row in the `contacts` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    /// Unique message ID (generated by the database)
    pub id: i32,
    /// Sender display name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
}

/// Insert a contact message
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Sender name (resolved from the user record or guest input)
/// * `email` - Sender email, already lowercased
/// * `message` - Message body, already trimmed and non-empty
///
/// # Returns
/// The persisted message including its generated id
pub async fn insert_contact(
    pool: &PgPool,
    name: &str,
    email: &str,
    message: &str,
) -> Result<ContactMessage, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contacts (name, email, message)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, message
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(message)
    .fetch_one(pool)
    .await
}

/// List all contact messages, newest first
pub async fn list_contacts(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        r#"
        SELECT id, name, email, message
        FROM contacts
        ORDER BY id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}
