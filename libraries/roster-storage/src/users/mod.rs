//! User persistence queries

use crate::error::{Result, StorageError};
use roster_core::types::{User, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Get all users, ordered by id
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, email, created_at FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(decode_user).collect()
}

/// Get a user by id, or `None` if absent
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(decode_user).transpose()
}

/// Insert a new user
///
/// Duplicate-id enforcement is the primary key constraint; a violation
/// surfaces as a database error.
pub async fn create(pool: &SqlitePool, user: &User) -> Result<()> {
    sqlx::query("INSERT INTO users (id, name, email, created_at) VALUES (?, ?, ?, ?)")
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.created_at.timestamp())
        .execute(pool)
        .await?;

    Ok(())
}

/// Replace the stored user matching `user.id`
///
/// Zero affected rows is not an error; a missing user leaves the table
/// unchanged. `created_at` is immutable and never written here.
pub async fn update(pool: &SqlitePool, user: &User) -> Result<()> {
    sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete the user matching `id`
///
/// Zero affected rows is not an error.
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

fn decode_user(row: &SqliteRow) -> Result<User> {
    let created_at = chrono::DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0)
        .ok_or_else(|| StorageError::Query("invalid created_at timestamp".to_string()))?;

    Ok(User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        created_at,
    })
}
