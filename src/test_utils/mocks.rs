//! Mock implementations for testing.
//!
//! These mocks provide in-memory implementations of domain traits
//! that can be configured to simulate various scenarios including
//! success, failure, and edge cases.

use async_trait::async_trait;
use chrono::Utc;
use secrecy::SecretString;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::{
    ApiKey, ApiKeySecret, AppError, DatabaseClient, DatabaseError, EntityId, NewApiKey, NewUser,
    User, UserCredentials,
};

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// If true, operations will fail.
    pub should_fail: bool,
    /// Custom error message for failures.
    pub error_message: Option<String>,
    /// Simulated latency in milliseconds.
    pub latency_ms: Option<u64>,
}

impl MockConfig {
    /// Creates a config that always succeeds.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that always fails.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
            latency_ms: None,
        }
    }

    /// Adds simulated latency.
    #[must_use]
    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency_ms = Some(ms);
        self
    }
}

/// Mock database client for testing.
///
/// Stores users and API keys in in-memory maps, keeping the credential
/// hashes in side tables exactly like the real adapter keeps them out of
/// the default read shapes.
///
/// # Example
///
/// ```ignore
/// use portal_db::test_utils::MockDatabaseClient;
/// use portal_db::test_utils::mocks::MockConfig;
///
/// // Create a mock that succeeds
/// let mock = MockDatabaseClient::new();
///
/// // Create a mock that fails
/// let failing_mock = MockDatabaseClient::with_config(MockConfig::failure("DB error"));
/// ```
pub struct MockDatabaseClient {
    users: Arc<Mutex<HashMap<EntityId, User>>>,
    user_credentials: Arc<Mutex<HashMap<EntityId, SecretString>>>,
    api_keys: Arc<Mutex<HashMap<EntityId, ApiKey>>>,
    api_key_secrets: Arc<Mutex<HashMap<EntityId, SecretString>>>,
    config: MockConfig,
    call_count: AtomicU64,
    is_healthy: AtomicBool,
}

impl MockDatabaseClient {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            user_credentials: Arc::new(Mutex::new(HashMap::new())),
            api_keys: Arc::new(Mutex::new(HashMap::new())),
            api_key_secrets: Arc::new(Mutex::new(HashMap::new())),
            config,
            call_count: AtomicU64::new(0),
            is_healthy: AtomicBool::new(true),
        }
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Gets the number of times any method was called.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Sets the health status.
    pub fn set_healthy(&self, healthy: bool) {
        self.is_healthy.store(healthy, Ordering::Relaxed);
    }

    /// Clears all stored records.
    pub fn clear(&self) {
        self.users.lock().unwrap().clear();
        self.user_credentials.lock().unwrap().clear();
        self.api_keys.lock().unwrap().clear();
        self.api_key_secrets.lock().unwrap().clear();
    }

    async fn before_call(&self) -> Result<(), AppError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(ms) = self.config.latency_ms {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        }

        if self.config.should_fail {
            let message = self
                .config
                .error_message
                .clone()
                .unwrap_or_else(|| "mock failure".to_string());
            return Err(AppError::Database(DatabaseError::Query(message)));
        }
        Ok(())
    }
}

impl Default for MockDatabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn health_check(&self) -> Result<(), AppError> {
        self.before_call().await?;
        if self.is_healthy.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(AppError::Database(DatabaseError::Connection(
                "mock unhealthy".to_string(),
            )))
        }
    }

    async fn get_user(&self, id: EntityId) -> Result<Option<User>, AppError> {
        self.before_call().await?;
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.before_call().await?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create_user(&self, data: &NewUser) -> Result<User, AppError> {
        self.before_call().await?;

        let duplicate = self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|user| user.email == data.email);
        if duplicate {
            return Err(AppError::Database(DatabaseError::Duplicate(
                data.email.clone(),
            )));
        }

        let mut user = User::new(EntityId::new_v4(), data.email.clone());
        if let Some(name) = &data.display_name {
            user = user.with_display_name(name.clone());
        }

        self.users.lock().unwrap().insert(user.id, user.clone());
        self.user_credentials
            .lock()
            .unwrap()
            .insert(user.id, data.hashed_password.clone());
        Ok(user)
    }

    async fn user_credentials(&self, id: EntityId) -> Result<Option<UserCredentials>, AppError> {
        self.before_call().await?;
        Ok(self
            .user_credentials
            .lock()
            .unwrap()
            .get(&id)
            .map(|hash| UserCredentials {
                user_id: id,
                hashed_password: hash.clone(),
            }))
    }

    async fn get_api_key(&self, id: EntityId) -> Result<Option<ApiKey>, AppError> {
        self.before_call().await?;
        Ok(self.api_keys.lock().unwrap().get(&id).cloned())
    }

    async fn list_api_keys(&self, user_id: EntityId) -> Result<Vec<ApiKey>, AppError> {
        self.before_call().await?;
        let mut keys: Vec<ApiKey> = self
            .api_keys
            .lock()
            .unwrap()
            .values()
            .filter(|key| key.user_id == user_id)
            .cloned()
            .collect();
        keys.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(keys)
    }

    async fn create_api_key(&self, data: &NewApiKey) -> Result<ApiKey, AppError> {
        self.before_call().await?;

        let key = ApiKey::new(
            EntityId::new_v4(),
            data.user_id,
            data.label.clone(),
            data.prefix.clone(),
        );
        self.api_keys.lock().unwrap().insert(key.id, key.clone());
        self.api_key_secrets
            .lock()
            .unwrap()
            .insert(key.id, data.hashed_secret_key.clone());
        Ok(key)
    }

    async fn api_key_secret(&self, id: EntityId) -> Result<Option<ApiKeySecret>, AppError> {
        self.before_call().await?;
        Ok(self
            .api_key_secrets
            .lock()
            .unwrap()
            .get(&id)
            .map(|hash| ApiKeySecret {
                key_id: id,
                hashed_secret_key: hash.clone(),
            }))
    }

    async fn touch_api_key(&self, id: EntityId) -> Result<(), AppError> {
        self.before_call().await?;
        match self.api_keys.lock().unwrap().get_mut(&id) {
            Some(key) => {
                key.last_used_at = Some(Utc::now());
                Ok(())
            }
            None => Err(AppError::Database(DatabaseError::NotFound(id.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn new_user() -> NewUser {
        NewUser::new(
            "ada@example.com".to_string(),
            SecretString::from("argon2-hash"),
        )
        .with_display_name("Ada".to_string())
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let mock = MockDatabaseClient::new();

        let created = mock.create_user(&new_user()).await.unwrap();
        let fetched = mock.get_user(created.id).await.unwrap().unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let mock = MockDatabaseClient::new();
        mock.create_user(&new_user()).await.unwrap();

        let err = mock.create_user(&new_user()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Database(DatabaseError::Duplicate(_))
        ));
    }

    #[tokio::test]
    async fn test_credentials_only_via_explicit_call() {
        let mock = MockDatabaseClient::new();
        let created = mock.create_user(&new_user()).await.unwrap();

        // Default read shape carries no credential data; the hash is only
        // reachable through the explicit call.
        let creds = mock.user_credentials(created.id).await.unwrap().unwrap();
        assert_eq!(creds.hashed_password.expose_secret(), "argon2-hash");
        assert_eq!(creds.user_id, created.id);
    }

    #[tokio::test]
    async fn test_api_key_lifecycle() {
        let mock = MockDatabaseClient::new();
        let user = mock.create_user(&new_user()).await.unwrap();

        let key = mock
            .create_api_key(&NewApiKey {
                user_id: user.id,
                label: "ci".to_string(),
                prefix: "pk_live_1a2b".to_string(),
                hashed_secret_key: SecretString::from("sha256-hash"),
            })
            .await
            .unwrap();

        assert!(key.last_used_at.is_none());
        mock.touch_api_key(key.id).await.unwrap();
        let touched = mock.get_api_key(key.id).await.unwrap().unwrap();
        assert!(touched.last_used_at.is_some());

        let secret = mock.api_key_secret(key.id).await.unwrap().unwrap();
        assert_eq!(secret.hashed_secret_key.expose_secret(), "sha256-hash");

        let listed = mock.list_api_keys(user.id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_touch_missing_key_is_not_found() {
        let mock = MockDatabaseClient::new();
        let err = mock.touch_api_key(EntityId::new_v4()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Database(DatabaseError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let mock = MockDatabaseClient::failing("boom");
        let err = mock.get_user(EntityId::new_v4()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Database(DatabaseError::Query(msg)) if msg == "boom"
        ));
    }

    #[tokio::test]
    async fn test_health_toggle_and_call_count() {
        let mock = MockDatabaseClient::new();
        mock.health_check().await.unwrap();

        mock.set_healthy(false);
        assert!(mock.health_check().await.is_err());
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_default_delete_user_not_supported() {
        let mock = MockDatabaseClient::new();
        let err = mock.delete_user(EntityId::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotSupported(_)));
    }
}
