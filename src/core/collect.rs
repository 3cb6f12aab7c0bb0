//! Secret collection.
//!
//! Walks every secret in a store and turns each into a [`CredentialRecord`].
//! A secret that cannot be fetched or whose name does not parse is skipped.
//! A failed listing, or losing the store part way through, ends the run.

use tracing::{debug, info, warn};

use crate::core::domain::{Collection, CredentialRecord, SkippedSecret};
use crate::core::naming;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Collect a record for every secret in `store`.
///
/// Records and skipped secrets keep the store's enumeration order.
///
/// # Errors
///
/// Returns the store's error if it cannot be listed, or if fetching a
/// secret fails with an error that is fatal for the run.
pub fn collect(store: &dyn SecretStore) -> Result<Collection> {
    let identifiers = store.list_secret_identifiers()?;
    info!(secrets = identifiers.len(), "collecting secrets");

    let mut collection = Collection::default();

    for identifier in identifiers {
        match build_record(store, &identifier) {
            Ok(record) => {
                debug!(identifier = %identifier, "collected");
                collection.records.push(record);
            }
            Err(error) if error.is_fatal() => {
                warn!(identifier = %identifier, error = %error, "aborting collection");
                return Err(error);
            }
            Err(error) => {
                debug!(identifier = %identifier, error = %error, "skipping secret");
                collection.skipped.push(SkippedSecret { identifier, error });
            }
        }
    }

    info!(
        records = collection.records.len(),
        skipped = collection.skipped.len(),
        "collection finished"
    );

    Ok(collection)
}

/// Fetch and normalize a single secret.
///
/// # Errors
///
/// Returns the store's per-secret error, or `NameError::InvalidFormat`.
pub fn build_record(store: &dyn SecretStore, identifier: &str) -> Result<CredentialRecord> {
    let secret = store.get_secret(identifier)?;
    let name = naming::parse(identifier)?;
    let username = secret.username().map(str::to_string);

    Ok(CredentialRecord::new(
        &name,
        username.as_deref(),
        secret.into_value(),
    ))
}
