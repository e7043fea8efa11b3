//! Domain traits defining contracts for external systems.

use async_trait::async_trait;

use super::error::AppError;
use super::types::{ApiKey, ApiKeySecret, EntityId, NewApiKey, NewUser, User, UserCredentials};

/// Database client trait for persistence operations.
///
/// Default read operations return the omitting shapes ([`User`],
/// [`ApiKey`]); the credential getters are the explicit escape hatch for
/// authentication code.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Check database connectivity
    async fn health_check(&self) -> Result<(), AppError>;

    /// Get a single user by ID
    async fn get_user(&self, id: EntityId) -> Result<Option<User>, AppError>;

    /// Get a single user by email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Create a new user
    async fn create_user(&self, data: &NewUser) -> Result<User, AppError>;

    /// Fetch a user's password hash for authentication
    async fn user_credentials(&self, id: EntityId) -> Result<Option<UserCredentials>, AppError>;

    /// Delete a user
    async fn delete_user(&self, id: EntityId) -> Result<bool, AppError> {
        let _ = id;
        Err(AppError::NotSupported(
            "delete_user not implemented".to_string(),
        ))
    }

    /// Get a single API key by ID
    async fn get_api_key(&self, id: EntityId) -> Result<Option<ApiKey>, AppError>;

    /// List a user's API keys
    async fn list_api_keys(&self, user_id: EntityId) -> Result<Vec<ApiKey>, AppError>;

    /// Create a new API key
    async fn create_api_key(&self, data: &NewApiKey) -> Result<ApiKey, AppError>;

    /// Fetch an API key's secret hash for request verification
    async fn api_key_secret(&self, id: EntityId) -> Result<Option<ApiKeySecret>, AppError>;

    /// Record that an API key was just used
    async fn touch_api_key(&self, id: EntityId) -> Result<(), AppError>;
}
