//! Run configuration.
//!
//! Resolved once at startup from command-line flags and their environment
//! fallbacks, then passed down. Nothing below the CLI reads the process
//! environment.

use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Key Vault base URL, without trailing slash
    pub vault_url: String,
    /// Where the credentials file is written
    pub output_file: PathBuf,
    /// Key Vault REST API version
    pub api_version: String,
    /// Global timeout for each HTTP call
    pub timeout: Duration,
    /// Credential sources
    pub auth: AuthSettings,
}

/// Inputs for the credential chain.
#[derive(Clone)]
pub struct AuthSettings {
    /// Pre-issued bearer token
    pub access_token: Option<String>,
    /// Entra tenant for the service principal
    pub tenant_id: Option<String>,
    /// Service principal application id
    pub client_id: Option<String>,
    /// Service principal secret
    pub client_secret: Option<String>,
    /// Entra authority, e.g. `https://login.microsoftonline.com`
    pub authority_host: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            access_token: None,
            tenant_id: None,
            client_id: None,
            client_secret: None,
            authority_host: constants::DEFAULT_AUTHORITY_HOST.to_string(),
        }
    }
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("authority_host", &self.authority_host)
            .finish()
    }
}

impl Settings {
    /// Settings for a vault with every other value at its default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is missing or not http(s).
    pub fn new(vault_url: Option<&str>) -> Result<Self> {
        Ok(Self {
            vault_url: validate_vault_url(vault_url)?,
            output_file: PathBuf::from(constants::DEFAULT_OUTPUT_FILE),
            api_version: constants::DEFAULT_API_VERSION.to_string(),
            timeout: constants::DEFAULT_TIMEOUT,
            auth: AuthSettings::default(),
        })
    }
}

/// Check and normalize a Key Vault URL.
///
/// Blank values count as missing. The scheme is matched case-insensitively
/// and lowercased; the trailing slash is dropped so paths can be appended
/// directly.
///
/// # Errors
///
/// Returns `ConfigError::MissingVaultUrl` or `ConfigError::InvalidVaultUrl`.
pub fn validate_vault_url(url: Option<&str>) -> Result<String> {
    let url = match url.map(str::trim) {
        Some(u) if !u.is_empty() => u,
        _ => return Err(ConfigError::MissingVaultUrl.into()),
    };

    let invalid = || ConfigError::InvalidVaultUrl(url.to_string());

    let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
    if !scheme.eq_ignore_ascii_case("https") && !scheme.eq_ignore_ascii_case("http") {
        return Err(invalid().into());
    }

    let rest = rest.trim_end_matches('/');
    if rest.is_empty() {
        return Err(invalid().into());
    }

    let normalized = format!("{}://{}", scheme.to_ascii_lowercase(), rest);
    debug!(vault_url = %normalized, "resolved vault url");
    Ok(normalized)
}

/// Keep blank environment values from masking real ones.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
