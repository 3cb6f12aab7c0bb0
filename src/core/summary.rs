//! Run summary grouped by organization.

use crate::core::domain::CredentialRecord;

/// Categories collected for one organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationSummary {
    pub organization: String,
    /// Distinct categories, first-seen order
    pub categories: Vec<String>,
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of records written
    pub total: usize,
    /// Organizations in first-seen order
    pub organizations: Vec<OrganizationSummary>,
}

impl Summary {
    /// Group records by organization.
    pub fn from_records(records: &[CredentialRecord]) -> Self {
        let mut organizations: Vec<OrganizationSummary> = Vec::new();

        for record in records {
            let idx = match organizations
                .iter()
                .position(|o| o.organization == record.organization)
            {
                Some(idx) => idx,
                None => {
                    organizations.push(OrganizationSummary {
                        organization: record.organization.clone(),
                        categories: Vec::new(),
                    });
                    organizations.len() - 1
                }
            };

            let categories = &mut organizations[idx].categories;
            if !categories.contains(&record.test_category) {
                categories.push(record.test_category.clone());
            }
        }

        Self {
            total: records.len(),
            organizations,
        }
    }
}
