/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Emails are
 * stored lowercased; callers normalize request input before lookups and
 * inserts so the UNIQUE constraint on `users.email` compares a single
 * canonical form.
 */

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (generated by the database)
    pub id: i32,
    /// Display name
    pub name: String,
    /// Email address (unique, lowercase)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
}

/// User projection safe to return to clients
///
/// Deliberately has no `password_hash` field; listing queries never
/// select the column.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    /// Unique user ID
    pub id: i32,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - Email address, already lowercased
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error; a duplicate email surfaces as the UNIQUE
/// constraint violation.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, password_hash
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Email address, already lowercased
///
/// # Returns
/// User or None if not found
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// List all users
///
/// Returns the client-safe projection only.
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT id, name, email
        FROM users
        "#,
    )
    .fetch_all(pool)
    .await
}
