/// User domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier, unique within one store instance
pub type UserId = i64;

/// User account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email (format is not validated)
    pub email: String,

    /// Creation timestamp, set once and immutable thereafter
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a user
///
/// The id and creation timestamp are assigned by the service, never by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}
