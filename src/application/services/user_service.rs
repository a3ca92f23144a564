//! User registration, lookup and soft deletion.

use bcrypt::DEFAULT_COST;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// Minimum accepted password length, in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Registration input with a plaintext password.
#[derive(Debug, Clone)]
pub struct NewUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Service for managing users.
///
/// Passwords are stored as salted bcrypt hashes; the plaintext never reaches
/// the repository.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a user.
    ///
    /// Email is trimmed and lowercased; name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email, name or password is invalid.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, request: NewUserRequest) -> Result<User, AppError> {
        let email = request.email.trim().to_lowercase();
        let name = request.name.trim().to_string();

        if !is_plausible_email(&email) {
            return Err(AppError::bad_request(
                "Invalid email address",
                json!({ "field": "email" }),
            ));
        }
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Name must not be empty",
                json!({ "field": "name" }),
            ));
        }
        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
                json!({ "field": "password", "min": MIN_PASSWORD_LENGTH }),
            ));
        }

        let new_user = NewUser {
            email,
            name,
            password_hash: hash_password(request.password).await?,
        };

        let user = self.repository.create(new_user).await.map_err(|e| match e {
            AppError::Conflict { .. } => AppError::conflict(
                "Email already registered",
                json!({ "field": "email" }),
            ),
            other => other,
        })?;
        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    /// Retrieves an active user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist or was deleted.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(User::is_active)
            .ok_or_else(|| user_not_found(id))
    }

    /// Lists every user, deleted ones included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Soft-deletes a user and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist or was
    /// already deleted.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<User, AppError> {
        let user = self
            .repository
            .soft_delete(id)
            .await?
            .ok_or_else(|| user_not_found(id))?;
        tracing::info!(user_id = id, "User deleted");

        Ok(user)
    }
}

/// Hashes a password with bcrypt at [`DEFAULT_COST`].
///
/// Runs on the blocking pool.
async fn hash_password(password: String) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, DEFAULT_COST))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task failed");
            AppError::internal("Password hashing failed", json!({}))
        })?;

    hashed.map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        AppError::internal("Password hashing failed", json!({}))
    })
}

fn user_not_found(id: i64) -> AppError {
    AppError::not_found("User not found", json!({ "id": id }))
}

/// Cheap shape check; the DTO layer runs the full `validator` email rule.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}
