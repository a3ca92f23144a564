//! User entity.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// Users are never removed from storage. Deleting a user sets `deleted`, after
/// which the user can no longer submit or like links.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        email: String,
        name: String,
        password_hash: String,
        deleted: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            password_hash,
            deleted,
            created_at,
        }
    }

    /// Returns true if the user has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

/// Input data for registering a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}
