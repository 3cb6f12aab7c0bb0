//! Secret identifier grammar.
//!
//! Identifiers look like `<org>-<category>[-<testName>]`. Everything after
//! the second separator belongs to the test name, hyphens included.

use crate::core::constants::NAME_SEPARATOR;
use crate::core::domain::ParsedName;
use crate::error::{NameError, Result};

/// Parse a secret identifier into its organization, category and test name.
///
/// # Errors
///
/// Returns `NameError::InvalidFormat` if the identifier has fewer than two
/// segments, or an empty organization or category.
pub fn parse(identifier: &str) -> Result<ParsedName> {
    let mut parts = identifier.splitn(3, NAME_SEPARATOR);

    let organization = parts.next().unwrap_or_default();
    let category = match parts.next() {
        Some(category) => category,
        None => return Err(NameError::InvalidFormat(identifier.to_string()).into()),
    };

    if organization.is_empty() || category.is_empty() {
        return Err(NameError::InvalidFormat(identifier.to_string()).into());
    }

    Ok(ParsedName::new(
        organization.to_string(),
        category.to_string(),
        parts.next().map(str::to_string),
    ))
}
