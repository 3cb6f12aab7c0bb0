//! In-memory secret store.
//!
//! Holds a fixed list of secrets in insertion order. Individual secrets can
//! be marked missing, denied or unreachable, and the whole store can be made
//! unreachable.

use std::collections::BTreeMap;

use super::SecretStore;
use crate::core::domain::StoredSecret;
use crate::error::{Result, StoreError};

#[derive(Debug, Clone)]
enum Entry {
    Secret(StoredSecret),
    Missing,
    Denied,
    Unreachable,
}

/// Secret store backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<(String, Entry)>,
    unreachable: bool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose listing always fails.
    pub fn unreachable() -> Self {
        Self {
            entries: Vec::new(),
            unreachable: true,
        }
    }

    /// Add a secret without tags.
    pub fn with_secret(self, name: &str, value: &str) -> Self {
        self.with_tagged_secret(name, value, &[])
    }

    /// Add a secret with tags.
    pub fn with_tagged_secret(mut self, name: &str, value: &str, tags: &[(&str, &str)]) -> Self {
        let tags: BTreeMap<String, String> = tags
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.entries.push((
            name.to_string(),
            Entry::Secret(StoredSecret::new(value.to_string(), tags)),
        ));
        self
    }

    /// List a secret that cannot be fetched.
    pub fn with_missing(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), Entry::Missing));
        self
    }

    /// List a secret the caller may not read.
    pub fn with_denied(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), Entry::Denied));
        self
    }

    /// List a secret whose fetch loses the connection to the store.
    pub fn with_unreachable(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), Entry::Unreachable));
        self
    }

    fn connection_error(reason: &str) -> StoreError {
        StoreError::Connection {
            url: "memory://".to_string(),
            reason: reason.to_string(),
        }
    }
}

impl SecretStore for MemoryStore {
    fn list_secret_identifiers(&self) -> Result<Vec<String>> {
        if self.unreachable {
            return Err(Self::connection_error("store unreachable").into());
        }
        Ok(self.entries.iter().map(|(name, _)| name.clone()).collect())
    }

    fn get_secret(&self, identifier: &str) -> Result<StoredSecret> {
        let entry = self
            .entries
            .iter()
            .find(|(name, _)| name == identifier)
            .map(|(_, entry)| entry);

        match entry {
            Some(Entry::Secret(secret)) => Ok(secret.clone()),
            Some(Entry::Denied) => Err(StoreError::AccessDenied(identifier.to_string()).into()),
            Some(Entry::Unreachable) => Err(Self::connection_error("connection reset").into()),
            Some(Entry::Missing) | None => Err(StoreError::NotFound(identifier.to_string()).into()),
        }
    }
}
