//! Secret store access.
//!
//! The collector only sees the [`SecretStore`] trait, so it can run against
//! Azure Key Vault or an in-memory store alike.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `aws.rs`)
//! 3. Re-export from this module

use crate::core::domain::StoredSecret;
use crate::error::Result;

mod keyvault;
mod memory;

pub use keyvault::KeyVault;
pub use memory::MemoryStore;

/// Read-only secret store.
pub trait SecretStore {
    /// List every secret identifier, in store order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the store cannot be reached, or
    /// `StoreError::Rejected` if it refuses the caller. Both are fatal for a
    /// run.
    fn list_secret_identifiers(&self) -> Result<Vec<String>>;

    /// Fetch one secret's value and tags.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound`, `StoreError::AccessDenied` or
    /// `StoreError::Fetch`. These only affect the requested secret.
    fn get_secret(&self, identifier: &str) -> Result<StoredSecret>;
}
