//! kvcreds - Materialize Azure Key Vault secrets as a test credentials file.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kvcreds::cli::output;
use kvcreds::cli::{execute, Cli};
use kvcreds::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();
    output::init();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("KVCREDS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kvcreds=debug")
        } else {
            EnvFilter::new("kvcreds=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingVaultUrl) => {
                Some("set KEYVAULT_URL or pass --keyvault-url")
            }
            Error::Auth(_) | Error::Store(StoreError::Rejected { .. }) => {
                Some("run: az login, or set AZURE_TENANT_ID, AZURE_CLIENT_ID and AZURE_CLIENT_SECRET")
            }
            Error::Store(StoreError::Connection { .. }) => {
                Some("check --keyvault-url and that the vault is reachable")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
