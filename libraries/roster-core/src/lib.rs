//! Roster Core
//!
//! Domain types, the store capability trait, and error handling for Roster.
//!
//! This crate is the contract between the layers of the service: handlers
//! and the application service depend only on the types and the
//! [`UserStore`] trait defined here, never on a concrete store backend.
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::User;
//! use chrono::Utc;
//!
//! let user = User {
//!     id: 1,
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     created_at: Utc::now(),
//! };
//! assert_eq!(user.name, "Alice");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use store::UserStore;
pub use types::{CreateUser, User, UserId};
