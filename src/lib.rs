//! Portal DB
//!
//! The shared database-client crate of the Portal web application. It
//! produces exactly one configured client per process and hands the same
//! instance to every caller, while omitting credential fields from
//! default query results.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Shared Accessor                │
//! │   process-wide slot, install() / shared()    │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │   Trait, entity types, errors (no I/O)       │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │   sqlx Postgres adapter + omission policy    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **One client per process**: a `OnceCell` slot guarantees reference
//!   equality across all callers
//! - **Field omission**: default reads never select
//!   `users.hashed_password` or `api_keys.hashed_secret_key`; explicit
//!   credential operations are the only way at those columns
//! - **Dependency injection**: the `DatabaseClient` trait is the seam;
//!   bootstrap code may `install` its own instance, tests use the mock
//! - **Error handling**: hierarchical error types with `thiserror`,
//!   driver failures propagated without translation
//! - **Logging**: structured logging with `tracing`
//!
//! # Example
//!
//! ```ignore
//! use portal_db::{shared, SharedDatabase};
//! use portal_db::domain::DatabaseClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), portal_db::domain::AppError> {
//!     // First call constructs the client from DATABASE_URL / APP_ENV;
//!     // every later call anywhere in the process gets the same Arc.
//!     let db: SharedDatabase = shared().await?;
//!     db.health_check().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod domain;
pub mod infra;
pub mod shared;

pub use config::{AppEnv, DbConfig};
pub use infra::{FieldOmissionPolicy, PostgresClient, PostgresConfig};
pub use shared::{SharedDatabase, install, shared, try_shared};

// Test utilities are available in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
