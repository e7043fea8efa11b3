//! Field-level omission policy for default reads.
//!
//! The policy is fixed when the client is constructed and drives which
//! columns the adapter's default SELECTs may name. Credential columns are
//! omitted here and only reachable through the explicit credential
//! operations on the client trait.

use std::collections::{BTreeMap, BTreeSet};

/// Entity-to-columns mapping of fields excluded from default query results.
///
/// Immutable once handed to a client; the builder methods consume `self`
/// so a policy is assembled in one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOmissionPolicy {
    entries: BTreeMap<&'static str, BTreeSet<&'static str>>,
}

impl FieldOmissionPolicy {
    /// A policy omitting nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The application's standard policy: credential hashes on `users`
    /// and `api_keys` are excluded from default reads.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .omit("users", "hashed_password")
            .omit("api_keys", "hashed_secret_key")
    }

    /// Adds one omitted column for an entity.
    #[must_use]
    pub fn omit(mut self, entity: &'static str, field: &'static str) -> Self {
        self.entries.entry(entity).or_default().insert(field);
        self
    }

    /// Whether the given column is omitted from the entity's default reads.
    #[must_use]
    pub fn is_omitted(&self, entity: &str, field: &str) -> bool {
        self.entries
            .get(entity)
            .is_some_and(|fields| fields.contains(field))
    }

    /// The omitted columns for one entity, in stable order.
    pub fn omitted(&self, entity: &str) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.get(entity).into_iter().flatten().copied()
    }

    /// The entities the policy covers, in stable order.
    pub fn entities(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Builds the comma-separated column list for a default SELECT on
    /// `entity`, dropping every omitted column from `columns`.
    #[must_use]
    pub fn select_list(&self, entity: &str, columns: &[&str]) -> String {
        columns
            .iter()
            .filter(|column| !self.is_omitted(entity, column))
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for FieldOmissionPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
