/// User service: business rules above the store
use chrono::Utc;
use rand::Rng;
use roster_core::{
    error::Result,
    store::UserStore,
    types::{CreateUser, User, UserId},
};
use std::sync::Arc;

/// Upper bound (exclusive) for randomly assigned user ids
const MAX_RANDOM_ID: UserId = 1_000_000;

/// Business-rule layer sitting above the store abstraction.
///
/// Assigns ids and creation timestamps on create; every other operation
/// passes straight through to the backing store.
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Build a service over the store selected at startup
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create a user with a freshly assigned id and timestamp.
    ///
    /// Ids are random in a bounded range and not collision-proof; a real
    /// deployment would use database-assigned identity or UUIDs.
    pub async fn create(&self, req: CreateUser) -> Result<User> {
        let user = User {
            id: generate_id(),
            name: req.name,
            email: req.email,
            created_at: Utc::now(),
        };

        self.store.create(&user).await?;
        Ok(user)
    }

    /// Get all users
    pub async fn get_all(&self) -> Result<Vec<User>> {
        self.store.get_all().await
    }

    /// Get a user by id
    pub async fn get_by_id(&self, id: UserId) -> Result<User> {
        self.store.get_by_id(id).await
    }

    /// Replace a stored user; a no-op when the id has no match
    pub async fn update(&self, user: &User) -> Result<()> {
        self.store.update(user).await
    }

    /// Delete a user; a no-op when the id has no match
    pub async fn delete(&self, id: UserId) -> Result<()> {
        self.store.delete(id).await
    }
}

fn generate_id() -> UserId {
    rand::thread_rng().gen_range(1..MAX_RANDOM_ID)
}
