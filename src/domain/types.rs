use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a unique identifier for domain entities.
pub type EntityId = Uuid;

/// An application user as returned by default reads.
///
/// This is the omitting shape: the credential column never appears here.
/// Code that genuinely needs the password hash goes through
/// [`UserCredentials`] via an explicit repository call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: EntityId, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            display_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_display_name(mut self, display_name: String) -> Self {
        self.display_name = Some(display_name);
        self
    }
}

/// A user's password hash, fetched explicitly for authentication flows.
///
/// Deliberately not `Serialize`: the hash must never leave the process
/// through a serialized response by accident.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user_id: EntityId,
    pub hashed_password: SecretString,
}

/// Request payload for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub display_name: Option<String>,
    pub hashed_password: SecretString,
}

impl NewUser {
    pub fn new(email: String, hashed_password: SecretString) -> Self {
        Self {
            email,
            display_name: None,
            hashed_password,
        }
    }

    pub fn with_display_name(mut self, display_name: String) -> Self {
        self.display_name = Some(display_name);
        self
    }
}

/// An API key record as returned by default reads.
///
/// `prefix` is the public, non-secret portion shown in dashboards; the
/// secret hash lives in [`ApiKeySecret`] and is omitted here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiKey {
    pub id: EntityId,
    pub user_id: EntityId,
    pub label: String,
    pub prefix: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl ApiKey {
    pub fn new(id: EntityId, user_id: EntityId, label: String, prefix: String) -> Self {
        Self {
            id,
            user_id,
            label,
            prefix,
            created_at: Utc::now(),
            last_used_at: None,
        }
    }
}

/// An API key's secret hash, fetched explicitly for request verification.
#[derive(Debug, Clone)]
pub struct ApiKeySecret {
    pub key_id: EntityId,
    pub hashed_secret_key: SecretString,
}

/// Request payload for creating a new API key.
#[derive(Debug, Clone, Deserialize)]
pub struct NewApiKey {
    pub user_id: EntityId,
    pub label: String,
    pub prefix: String,
    pub hashed_secret_key: SecretString,
}
