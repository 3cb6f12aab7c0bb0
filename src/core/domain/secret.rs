//! Secret as returned by a store.

use std::collections::BTreeMap;

use crate::core::constants::USERNAME_TAG;

/// A secret value and its tag metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoredSecret {
    value: String,
    tags: BTreeMap<String, String>,
}

impl StoredSecret {
    /// Create a stored secret
    pub fn new(value: String, tags: BTreeMap<String, String>) -> Self {
        Self { value, tags }
    }

    /// Raw secret value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The `Username` tag, if set
    pub fn username(&self) -> Option<&str> {
        self.tags.get(USERNAME_TAG).map(String::as_str)
    }

    /// Consume into the raw value
    pub fn into_value(self) -> String {
        self.value
    }
}
