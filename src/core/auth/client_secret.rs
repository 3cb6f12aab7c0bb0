//! Service principal credential.
//!
//! OAuth2 client-credentials grant against the Microsoft Entra token
//! endpoint: `{authority}/{tenant}/oauth2/v2.0/token`.

use serde::Deserialize;
use tracing::trace;
use zeroize::Zeroizing;

use super::{AccessToken, TokenCredential};
use crate::core::http;
use crate::error::{AuthError, Result};

/// Token endpoint response. Only the token is used; the run is short-lived.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client id + client secret credential.
pub struct ClientSecretCredential {
    agent: ureq::Agent,
    token_url: String,
    client_id: String,
    client_secret: Zeroizing<String>,
}

impl ClientSecretCredential {
    /// Create a credential for a tenant.
    pub fn new(
        agent: ureq::Agent,
        authority_host: &str,
        tenant_id: &str,
        client_id: &str,
        client_secret: String,
    ) -> Self {
        Self {
            agent,
            token_url: token_url(authority_host, tenant_id),
            client_id: client_id.to_string(),
            client_secret: Zeroizing::new(client_secret),
        }
    }

    fn fail(&self, reason: String) -> AuthError {
        AuthError::Failed {
            source_name: self.name(),
            reason,
        }
    }
}

fn token_url(authority_host: &str, tenant_id: &str) -> String {
    format!(
        "{}/{}/oauth2/v2.0/token",
        authority_host.trim_end_matches('/'),
        tenant_id
    )
}

impl TokenCredential for ClientSecretCredential {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn get_token(&self, scope: &str) -> Result<AccessToken> {
        trace!(url = %self.token_url, client_id = %self.client_id, "requesting token");

        let mut response = self
            .agent
            .post(self.token_url.as_str())
            .header("User-Agent", http::USER_AGENT)
            .send_form([
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("scope", scope),
            ])
            .map_err(|e| self.fail(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(self
                .fail(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    http::describe_error_body(&body)
                ))
                .into());
        }

        let token: TokenResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| self.fail(format!("invalid token response: {}", e)))?;

        Ok(AccessToken::new(token.access_token))
    }
}
