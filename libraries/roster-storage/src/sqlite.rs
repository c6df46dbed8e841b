//! Durable store backed by `SQLite`

use crate::users;
use async_trait::async_trait;
use roster_core::{
    error::Result,
    store::UserStore,
    types::{User, UserId},
    CoreError,
};
use sqlx::SqlitePool;

/// `UserStore` implementation over an sqlx connection pool
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Wrap an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn get_all(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await.map_err(Into::into)
    }

    async fn get_by_id(&self, id: UserId) -> Result<User> {
        users::get_by_id(&self.pool, id)
            .await
            .map_err(CoreError::from)?
            .ok_or_else(|| CoreError::not_found("User", id.to_string()))
    }

    async fn create(&self, user: &User) -> Result<()> {
        users::create(&self.pool, user).await.map_err(Into::into)
    }

    async fn update(&self, user: &User) -> Result<()> {
        users::update(&self.pool, user).await.map_err(Into::into)
    }

    async fn delete(&self, id: UserId) -> Result<()> {
        users::delete(&self.pool, id).await.map_err(Into::into)
    }
}
