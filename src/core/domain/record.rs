//! Credential record.
//!
//! The unit written to the credentials file. Field order here is the key
//! order in the emitted YAML.

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_TEST_NAME, ENVIRONMENT};
use crate::core::domain::ParsedName;

/// One entry of the credentials file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub organization: String,
    pub environment: String,
    pub test_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,
    pub credentials: Credentials,
}

/// Login pair for a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl CredentialRecord {
    /// Build a record from a parsed identifier and the secret's contents.
    ///
    /// Falls back to `user_<organization>_<category>` when no username is
    /// given. Empty and `"default"` test names are dropped.
    pub fn new(name: &ParsedName, username: Option<&str>, password: String) -> Self {
        let username = match username {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => format!("user_{}_{}", name.organization(), name.category()),
        };

        let test_name = name
            .test_name()
            .filter(|t| !t.is_empty() && *t != DEFAULT_TEST_NAME)
            .map(str::to_string);

        Self {
            organization: name.organization().to_string(),
            environment: ENVIRONMENT.to_string(),
            test_category: name.category().to_string(),
            test_name,
            credentials: Credentials { username, password },
        }
    }
}
