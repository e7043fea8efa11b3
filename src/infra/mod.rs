//! Infrastructure layer implementations.

pub mod database;

pub use database::{FieldOmissionPolicy, PostgresClient, PostgresConfig};
