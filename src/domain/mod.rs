//! Domain layer containing core business types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AppError, ConfigError, DatabaseError};
pub use traits::DatabaseClient;
pub use types::{ApiKey, ApiKeySecret, EntityId, NewApiKey, NewUser, User, UserCredentials};
