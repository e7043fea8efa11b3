//! Concrete database client implementations.
//!
//! This module contains the production database adapter that implements
//! the `DatabaseClient` trait defined in the domain layer, together with
//! the field-omission policy it is configured with.

pub mod omit;
pub mod postgres;

pub use omit::FieldOmissionPolicy;
pub use postgres::{PostgresClient, PostgresConfig};
