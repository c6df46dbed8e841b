//! Store trait for user persistence

use crate::error::Result;
use crate::types::{User, UserId};
use async_trait::async_trait;

/// Capability interface any user store must implement.
///
/// Two structurally distinct implementations exist: a durable SQLite-backed
/// store and a non-persistent in-memory fallback. The backing variant is
/// chosen once at startup and injected into the service; no other layer
/// branches on it.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users, in store-defined order.
    async fn get_all(&self) -> Result<Vec<User>>;

    /// Get a user by id. Fails with a `NotFound` error when absent.
    async fn get_by_id(&self, id: UserId) -> Result<User>;

    /// Add a new user. The id has already been assigned by the caller.
    async fn create(&self, user: &User) -> Result<()>;

    /// Replace the stored user matching `user.id`. A no-op, not an error,
    /// when no stored user matches.
    async fn update(&self, user: &User) -> Result<()>;

    /// Remove the user matching `id`. A no-op when absent.
    async fn delete(&self, id: UserId) -> Result<()>;
}
