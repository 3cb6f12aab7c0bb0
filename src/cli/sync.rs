//! Sync command - pull secrets from Key Vault into the credentials file.

use std::path::Path;
use tracing::info;

use crate::cli::output;
use crate::core::auth;
use crate::core::collect::collect;
use crate::core::config::Settings;
use crate::core::emit::emit;
use crate::core::http;
use crate::core::store::{KeyVault, SecretStore};
use crate::core::summary::Summary;
use crate::error::Result;

/// Connect to the configured vault and write the credentials file.
pub fn execute(settings: &Settings) -> Result<()> {
    info!(vault_url = %settings.vault_url, "running sync");
    output::vault(&settings.vault_url);

    let agent = http::agent(settings.timeout);
    let credential = auth::default_credential(&settings.auth, &agent);

    output::connecting();
    let vault = KeyVault::connect(settings, agent, &credential);
    output::connected(vault.is_ok());

    pull(&vault?, &settings.output_file)?;
    Ok(())
}

/// Collect every secret from `store` and write the records to `output_file`.
///
/// Skipped secrets are reported as warnings. When nothing was collected the
/// output file is left untouched and `None` is returned.
pub fn pull(store: &dyn SecretStore, output_file: &Path) -> Result<Option<Summary>> {
    let collection = collect(store)?;

    for skipped in &collection.skipped {
        output::skipped(&skipped.identifier, &skipped.error);
    }

    if collection.is_empty() {
        output::warn("no credentials found in Key Vault");
        return Ok(None);
    }

    emit(&collection.records, output_file)?;
    output::generated(output_file, collection.records.len());

    let summary = Summary::from_records(&collection.records);
    output::summary(&summary, output_file);

    Ok(Some(summary))
}
