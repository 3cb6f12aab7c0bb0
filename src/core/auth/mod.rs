//! Token acquisition for the secret store.
//!
//! Authentication is an explicit [`TokenCredential`] handed to the store,
//! so nothing in the collection path depends on ambient credentials.
//!
//! ## Sources
//!
//! - **static**: a pre-issued bearer token (`KEYVAULT_ACCESS_TOKEN`).
//! - **environment**: service principal client-credentials flow
//!   (`AZURE_TENANT_ID`, `AZURE_CLIENT_ID`, `AZURE_CLIENT_SECRET`).
//! - **azure-cli**: `az account get-access-token`, after `az login`.
//!
//! [`default_credential`] chains whichever sources are configured, in that
//! order.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::AuthSettings;
use crate::error::{AuthError, Result};

mod azure_cli;
mod client_secret;

pub use azure_cli::AzureCliCredential;
pub use client_secret::ClientSecretCredential;

/// OAuth2 bearer token.
///
/// The token string is wiped from memory on drop.
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap a raw token string
    pub fn new(token: String) -> Self {
        Self(Zeroizing::new(token))
    }

    /// The raw token
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Source of bearer tokens.
pub trait TokenCredential {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Acquire a token for an OAuth2 scope.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if this source cannot produce a token.
    fn get_token(&self, scope: &str) -> Result<AccessToken>;
}

/// A fixed, pre-issued token.
pub struct StaticToken(Zeroizing<String>);

impl StaticToken {
    /// Use `token` for every request
    pub fn new(token: String) -> Self {
        Self(Zeroizing::new(token))
    }
}

impl TokenCredential for StaticToken {
    fn name(&self) -> &'static str {
        "static"
    }

    fn get_token(&self, _scope: &str) -> Result<AccessToken> {
        if self.0.is_empty() {
            return Err(AuthError::Failed {
                source_name: self.name(),
                reason: "token is empty".to_string(),
            }
            .into());
        }
        Ok(AccessToken::new(self.0.to_string()))
    }
}

/// Tries each source in order and returns the first token.
#[derive(Default)]
pub struct ChainedCredential {
    sources: Vec<Box<dyn TokenCredential>>,
}

impl ChainedCredential {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source to the chain.
    pub fn with(mut self, source: impl TokenCredential + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Names of the sources, in order.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

impl TokenCredential for ChainedCredential {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn get_token(&self, scope: &str) -> Result<AccessToken> {
        let mut attempts = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            match source.get_token(scope) {
                Ok(token) => {
                    debug!(source = source.name(), "acquired token");
                    return Ok(token);
                }
                Err(e) => {
                    debug!(source = source.name(), error = %e, "credential source failed");
                    attempts.push(format!("{}: {}", source.name(), e));
                }
            }
        }

        Err(AuthError::Unavailable(attempts).into())
    }
}

/// Build the default credential chain from resolved settings.
///
/// Static token first, then the service principal when all three of tenant,
/// client id and secret are set, then the Azure CLI.
pub fn default_credential(settings: &AuthSettings, agent: &ureq::Agent) -> ChainedCredential {
    let mut chain = ChainedCredential::new();

    if let Some(token) = &settings.access_token {
        chain = chain.with(StaticToken::new(token.to_string()));
    }

    if let (Some(tenant), Some(client), Some(secret)) = (
        &settings.tenant_id,
        &settings.client_id,
        &settings.client_secret,
    ) {
        chain = chain.with(ClientSecretCredential::new(
            agent.clone(),
            &settings.authority_host,
            tenant,
            client,
            secret.to_string(),
        ));
    }

    let chain = chain.with(AzureCliCredential::new());
    debug!(sources = ?chain.source_names(), "credential chain");
    chain
}
