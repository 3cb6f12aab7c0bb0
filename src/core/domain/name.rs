//! Parsed secret identifier.

/// Structured metadata recovered from a secret identifier.
///
/// Organization and category are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    organization: String,
    category: String,
    test_name: Option<String>,
}

impl ParsedName {
    /// Create a parsed name. Callers go through `naming::parse`.
    pub(crate) fn new(organization: String, category: String, test_name: Option<String>) -> Self {
        Self {
            organization,
            category,
            test_name,
        }
    }

    /// Organization segment
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Test category segment
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Everything after the category, if present
    pub fn test_name(&self) -> Option<&str> {
        self.test_name.as_deref()
    }
}
