//! Process-wide shared database client.
//!
//! The application constructs exactly one [`PostgresClient`] per process.
//! Bootstrap code that wants explicit wiring builds a client itself and
//! calls [`install`]; everything else calls [`shared`], which initializes
//! the client from the environment on first use and returns the same
//! `Arc` to every caller afterwards.
//!
//! The slot is a `OnceCell`, so concurrent first calls cannot race into
//! constructing two clients. There is no way to replace the instance once
//! set; construction failures are not cached and the next call retries.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use crate::config::DbConfig;
use crate::domain::AppError;
use crate::infra::{FieldOmissionPolicy, PostgresClient};

/// The shape of the shared client instance, for type annotations in
/// application code.
pub type SharedDatabase = Arc<PostgresClient>;

static SHARED: OnceCell<SharedDatabase> = OnceCell::const_new();

/// Install a pre-built client into the process-wide slot.
///
/// Intended for application bootstrap, where the client is constructed
/// explicitly and handed to this crate before anything queries. Fails if
/// a client was already installed or lazily initialized.
pub fn install(client: SharedDatabase) -> Result<(), AppError> {
    SHARED.set(client).map_err(|_| {
        AppError::Internal("shared database client already installed".to_string())
    })
}

/// The shared client, if one has been initialized.
#[must_use]
pub fn try_shared() -> Option<SharedDatabase> {
    SHARED.get().cloned()
}

/// The shared client, initializing it on first call.
///
/// Initialization reads [`DbConfig`] from the environment and constructs
/// a lazy client with the standard omission policy; no connection is
/// opened until the first query. Every subsequent call returns a clone of
/// the same `Arc`.
///
/// # Errors
///
/// Propagates configuration errors (`DATABASE_URL` missing or malformed)
/// unchanged; this accessor adds no retry or error translation.
pub async fn shared() -> Result<SharedDatabase, AppError> {
    SHARED
        .get_or_try_init(|| async {
            let config = DbConfig::from_env()?;
            info!(env = ?config.env, "Initializing shared database client");
            let client = PostgresClient::new(
                &config.database_url,
                config.pool_config(),
                FieldOmissionPolicy::standard(),
            )?;
            Ok::<_, AppError>(Arc::new(client))
        })
        .await
        .cloned()
}
