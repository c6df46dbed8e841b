//! In-memory fallback store

use async_trait::async_trait;
use chrono::Utc;
use roster_core::{
    error::Result,
    store::UserStore,
    types::{User, UserId},
    CoreError,
};
use std::sync::RwLock;

/// Non-persistent `UserStore` used when the database cannot be reached.
///
/// Users are held in insertion order. The store is shared across request
/// workers, so the sequence sits behind a lock; the lock is never held
/// across an await point.
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-seeded with demonstration users
    pub fn with_samples() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                created_at: Utc::now(),
            },
            User {
                id: 2,
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                created_at: Utc::now(),
            },
        ];

        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_all(&self) -> Result<Vec<User>> {
        Ok(self.users.read().expect("users lock poisoned").clone())
    }

    async fn get_by_id(&self, id: UserId) -> Result<User> {
        self.users
            .read()
            .expect("users lock poisoned")
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("User", id.to_string()))
    }

    async fn create(&self, user: &User) -> Result<()> {
        self.users
            .write()
            .expect("users lock poisoned")
            .push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().expect("users lock poisoned");
        // Missing id is a no-op
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<()> {
        self.users
            .write()
            .expect("users lock poisoned")
            .retain(|u| u.id != id);
        Ok(())
    }
}
