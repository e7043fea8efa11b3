//! Environment-driven configuration for the database layer.
//!
//! `.env` files are honored in development via `dotenvy`; real environment
//! variables always win.

use std::env;
use std::str::FromStr;

use crate::domain::ConfigError;
use crate::infra::PostgresConfig;

/// Execution mode of the running process.
///
/// Only affects pool sizing defaults; the shared-client slot behaves the
/// same in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    /// Pool configuration defaults for this mode.
    #[must_use]
    pub fn pool_defaults(self) -> PostgresConfig {
        match self {
            AppEnv::Development => PostgresConfig::development(),
            AppEnv::Production => PostgresConfig::default(),
        }
    }

    #[must_use]
    pub fn is_production(self) -> bool {
        matches!(self, AppEnv::Production)
    }
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "test" => Ok(AppEnv::Development),
            "production" | "prod" => Ok(AppEnv::Production),
            other => Err(ConfigError::InvalidValue {
                key: "APP_ENV".to_string(),
                message: format!("unknown execution mode '{other}'"),
            }),
        }
    }
}

/// Configuration needed to construct the shared database client.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub env: AppEnv,
}

impl DbConfig {
    #[must_use]
    pub fn new(database_url: String, env: AppEnv) -> Self {
        Self { database_url, env }
    }

    /// Read configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `APP_ENV` defaults to development when
    /// unset, which is the only environmental branching this crate has.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Best-effort; absence of a .env file is the normal production case.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let env = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => AppEnv::default(),
        };

        Ok(Self { database_url, env })
    }

    /// Pool configuration appropriate for the configured execution mode.
    #[must_use]
    pub fn pool_config(&self) -> PostgresConfig {
        self.env.pool_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_env_parsing() {
        assert_eq!("development".parse::<AppEnv>().unwrap(), AppEnv::Development);
        assert_eq!("dev".parse::<AppEnv>().unwrap(), AppEnv::Development);
        assert_eq!("test".parse::<AppEnv>().unwrap(), AppEnv::Development);
        assert_eq!("production".parse::<AppEnv>().unwrap(), AppEnv::Production);
        assert_eq!("PROD".parse::<AppEnv>().unwrap(), AppEnv::Production);
    }

    #[test]
    fn test_app_env_rejects_unknown_mode() {
        let err = "staging".parse::<AppEnv>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "APP_ENV"));
    }

    #[test]
    fn test_app_env_defaults_to_development() {
        assert_eq!(AppEnv::default(), AppEnv::Development);
        assert!(!AppEnv::default().is_production());
    }

    #[test]
    fn test_pool_defaults_differ_by_mode() {
        let dev = AppEnv::Development.pool_defaults();
        let prod = AppEnv::Production.pool_defaults();
        assert!(dev.max_connections < prod.max_connections);
    }

    #[test]
    fn test_db_config_pool_selection() {
        let config = DbConfig::new("postgres://localhost/portal".to_string(), AppEnv::Production);
        assert_eq!(config.pool_config(), PostgresConfig::default());

        let config = DbConfig::new("postgres://localhost/portal".to_string(), AppEnv::Development);
        assert_eq!(config.pool_config(), PostgresConfig::development());
    }
}
