//! Azure CLI credential.
//!
//! Borrows the signed-in `az` session. Requires the `az` CLI on `PATH` and a
//! prior `az login`.

use serde::Deserialize;
use std::process::{Command, Stdio};
use tracing::trace;

use super::{AccessToken, TokenCredential};
use crate::error::{AuthError, Result};

/// Shape of `az account get-access-token --output json`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CliToken {
    access_token: String,
}

/// Token source backed by `az account get-access-token`.
#[derive(Debug, Default)]
pub struct AzureCliCredential;

impl AzureCliCredential {
    /// Create an Azure CLI credential
    pub fn new() -> Self {
        Self
    }

    fn fail(&self, reason: impl Into<String>) -> AuthError {
        AuthError::Failed {
            source_name: self.name(),
            reason: reason.into(),
        }
    }
}

/// `az` takes a resource, not a scope.
fn scope_to_resource(scope: &str) -> &str {
    scope.strip_suffix("/.default").unwrap_or(scope)
}

impl TokenCredential for AzureCliCredential {
    fn name(&self) -> &'static str {
        "azure-cli"
    }

    fn get_token(&self, scope: &str) -> Result<AccessToken> {
        let az = which::which("az").map_err(|_| {
            self.fail("az CLI not found. Install it from https://aka.ms/azure-cli")
        })?;

        let resource = scope_to_resource(scope);
        trace!(az = %az.display(), resource, "requesting token from az CLI");

        let output = Command::new(az)
            .args([
                "account",
                "get-access-token",
                "--resource",
                resource,
                "--output",
                "json",
            ])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.fail(format!("failed to spawn az: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.fail(stderr.trim().to_string()).into());
        }

        let token: CliToken = serde_json::from_slice(&output.stdout)
            .map_err(|e| self.fail(format!("unexpected az output: {}", e)))?;

        Ok(AccessToken::new(token.access_token))
    }
}
