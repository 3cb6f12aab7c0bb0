//! Azure Key Vault secret store.
//!
//! Talks to the Key Vault data-plane REST API with a bearer token obtained
//! once at connect time.
//!
//! ## Endpoints
//!
//! - `GET {vault}/secrets?api-version=..`: paged listing, follows `nextLink`
//! - `GET {vault}/secrets/{name}?api-version=..`: latest version of a secret

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

use super::SecretStore;
use crate::core::auth::{AccessToken, TokenCredential};
use crate::core::config::Settings;
use crate::core::constants::KEYVAULT_SCOPE;
use crate::core::domain::StoredSecret;
use crate::core::http;
use crate::error::{Result, StoreError};

/// One page of `GET /secrets`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretListPage {
    #[serde(default)]
    value: Vec<SecretItem>,
    #[serde(default)]
    next_link: Option<String>,
}

/// Entry in a listing page.
#[derive(Debug, Deserialize)]
struct SecretItem {
    id: String,
}

/// Body of `GET /secrets/{name}`.
#[derive(Debug, Deserialize)]
struct SecretBundle {
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    tags: Option<BTreeMap<String, String>>,
}

/// Key Vault client.
pub struct KeyVault {
    agent: ureq::Agent,
    vault_url: String,
    api_version: String,
    token: AccessToken,
}

impl std::fmt::Debug for KeyVault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyVault")
            .field("vault_url", &self.vault_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl KeyVault {
    /// Authenticate and return a client for `settings.vault_url`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if no token can be acquired.
    pub fn connect(
        settings: &Settings,
        agent: ureq::Agent,
        credential: &dyn TokenCredential,
    ) -> Result<Self> {
        debug!(vault_url = %settings.vault_url, "authenticating to Key Vault");

        let token = credential.get_token(KEYVAULT_SCOPE)?;

        info!(vault_url = %settings.vault_url, "connected to Key Vault");

        Ok(Self {
            agent,
            vault_url: settings.vault_url.clone(),
            api_version: settings.api_version.clone(),
            token,
        })
    }

    fn connection_error(&self, reason: String) -> StoreError {
        StoreError::Connection {
            url: self.vault_url.clone(),
            reason,
        }
    }

    /// GET with auth headers. Non-2xx statuses come back as `Ok`.
    fn get(&self, url: &str) -> std::result::Result<ureq::http::Response<ureq::Body>, ureq::Error> {
        trace!(url, "GET");
        self.agent
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token.secret()))
            .header("User-Agent", http::USER_AGENT)
            .header("Accept", "application/json")
            .call()
    }

    fn list_page(&self, url: &str) -> Result<SecretListPage> {
        let mut response = self.get(url).map_err(|e| self.connection_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(list_status_error(&self.vault_url, status.as_u16(), &body).into());
        }

        let page = response
            .body_mut()
            .read_json::<SecretListPage>()
            .map_err(|e| self.connection_error(format!("invalid listing response: {}", e)))?;
        Ok(page)
    }
}

/// Secret name from an item id such as
/// `https://kv.vault.azure.net/secrets/acme-login` (optionally followed by
/// a version segment).
fn name_from_id(id: &str) -> Option<&str> {
    let (_, rest) = id.split_once("/secrets/")?;
    let name = rest.split('/').next()?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Map a failed `GET /secrets` status. 401 and 403 mean the token was
/// refused; anything else is treated as the vault being unusable.
fn list_status_error(url: &str, status: u16, body: &str) -> StoreError {
    let reason = format!(
        "listing secrets returned HTTP {}: {}",
        status,
        http::describe_error_body(body)
    );
    match status {
        401 | 403 => StoreError::Rejected {
            url: url.to_string(),
            reason,
        },
        _ => StoreError::Connection {
            url: url.to_string(),
            reason,
        },
    }
}

/// Map a failed `GET /secrets/{name}` status to a per-secret error.
fn secret_status_error(name: &str, status: u16, body: &str) -> StoreError {
    match status {
        401 | 403 => StoreError::AccessDenied(name.to_string()),
        404 => StoreError::NotFound(name.to_string()),
        _ => StoreError::Fetch {
            name: name.to_string(),
            reason: format!("HTTP {}: {}", status, http::describe_error_body(body)),
        },
    }
}

impl SecretStore for KeyVault {
    fn list_secret_identifiers(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut next = Some(format!(
            "{}/secrets?api-version={}",
            self.vault_url, self.api_version
        ));
        let mut pages = 0usize;

        while let Some(url) = next {
            let page = self.list_page(&url)?;
            pages += 1;

            for item in &page.value {
                match name_from_id(&item.id) {
                    Some(name) => names.push(name.to_string()),
                    None => debug!(id = %item.id, "ignoring listing entry without a name"),
                }
            }

            next = page.next_link.filter(|link| !link.is_empty());
        }

        debug!(pages, secrets = names.len(), "listed secrets");
        Ok(names)
    }

    fn get_secret(&self, identifier: &str) -> Result<StoredSecret> {
        let url = format!(
            "{}/secrets/{}?api-version={}",
            self.vault_url, identifier, self.api_version
        );

        let mut response = self.get(&url).map_err(|e| StoreError::Fetch {
            name: identifier.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(secret_status_error(identifier, status.as_u16(), &body).into());
        }

        let bundle = response
            .body_mut()
            .read_json::<SecretBundle>()
            .map_err(|e| StoreError::Fetch {
                name: identifier.to_string(),
                reason: format!("invalid secret response: {}", e),
            })?;

        Ok(StoredSecret::new(
            bundle.value.unwrap_or_default(),
            bundle.tags.unwrap_or_default(),
        ))
    }
}
