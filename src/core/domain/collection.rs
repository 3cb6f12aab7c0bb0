//! Result of a collection run.

use crate::core::domain::CredentialRecord;
use crate::error::Error;

/// A secret that could not be turned into a record.
#[derive(Debug)]
pub struct SkippedSecret {
    /// Identifier as listed by the store
    pub identifier: String,
    /// Why it was skipped
    pub error: Error,
}

/// Records built from a store, plus the secrets that were skipped.
#[derive(Debug, Default)]
pub struct Collection {
    /// Records in store enumeration order
    pub records: Vec<CredentialRecord>,
    /// Skipped secrets in store enumeration order
    pub skipped: Vec<SkippedSecret>,
}

impl Collection {
    /// Whether no record was produced.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
