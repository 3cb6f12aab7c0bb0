//! Constants used throughout kvcreds.
//!
//! Centralizes magic strings and configuration values.

use std::time::Duration;

/// Default output file for generated credentials.
pub const DEFAULT_OUTPUT_FILE: &str = "config/credentials.yml";

/// Environment written into every record.
///
/// The store's real environment is not introspected.
pub const ENVIRONMENT: &str = "stage";

/// Secret tag holding the login name.
pub const USERNAME_TAG: &str = "Username";

/// Test name treated as "no specific test".
pub const DEFAULT_TEST_NAME: &str = "default";

/// Separator between identifier segments.
pub const NAME_SEPARATOR: char = '-';

/// Key Vault resource for Azure CLI token requests.
pub const KEYVAULT_RESOURCE: &str = "https://vault.azure.net";

/// OAuth2 scope for Key Vault data-plane access.
pub const KEYVAULT_SCOPE: &str = "https://vault.azure.net/.default";

/// Key Vault REST API version.
pub const DEFAULT_API_VERSION: &str = "7.4";

/// Microsoft Entra authority for the public cloud.
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Global timeout for each HTTP call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
