//! Command-line interface.

pub mod output;
pub mod sync;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::config::{self, AuthSettings, Settings};
use crate::core::constants;
use crate::error::Result;

/// kvcreds - Materialize Key Vault secrets as a test credentials file.
#[derive(Parser, Debug)]
#[command(
    name = "kvcreds",
    about = "Download secrets from Azure Key Vault and generate a credentials file",
    version,
    after_help = "Secret names follow <org>-<category>[-<testName>]. \
                  Set tag Username on a secret to override the generated login."
)]
pub struct Cli {
    /// Azure Key Vault URL (e.g., https://my-vault.vault.azure.net)
    #[arg(long, env = "KEYVAULT_URL", value_name = "URL")]
    pub keyvault_url: Option<String>,

    /// Output file path
    #[arg(long, value_name = "PATH", default_value = constants::DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Pre-issued bearer token for Key Vault
    #[arg(long, env = "KEYVAULT_ACCESS_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// Entra tenant for service principal authentication
    #[arg(long, env = "AZURE_TENANT_ID", value_name = "ID")]
    pub tenant_id: Option<String>,

    /// Service principal application id
    #[arg(long, env = "AZURE_CLIENT_ID", value_name = "ID")]
    pub client_id: Option<String>,

    /// Service principal secret
    #[arg(long, env = "AZURE_CLIENT_SECRET", hide_env_values = true, value_name = "SECRET")]
    pub client_secret: Option<String>,

    /// Entra authority host
    #[arg(
        long,
        env = "AZURE_AUTHORITY_HOST",
        value_name = "URL",
        default_value = constants::DEFAULT_AUTHORITY_HOST
    )]
    pub authority_host: String,

    /// Key Vault REST API version
    #[arg(long, value_name = "VERSION", default_value = constants::DEFAULT_API_VERSION)]
    pub api_version: String,

    /// HTTP timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = constants::DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the run settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no usable Key Vault URL was given.
    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings {
            vault_url: config::validate_vault_url(self.keyvault_url.as_deref())?,
            output_file: self.output_file.clone(),
            api_version: self.api_version.clone(),
            timeout: Duration::from_secs(self.timeout),
            auth: AuthSettings {
                access_token: config::non_empty(self.access_token.clone()),
                tenant_id: config::non_empty(self.tenant_id.clone()),
                client_id: config::non_empty(self.client_id.clone()),
                client_secret: config::non_empty(self.client_secret.clone()),
                authority_host: self.authority_host.clone(),
            },
        })
    }
}

/// Run kvcreds with parsed arguments.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    sync::execute(&settings)
}
