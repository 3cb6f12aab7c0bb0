//! Error types.
//!
//! Domain errors are grouped by the stage that raises them and folded into
//! a single [`Error`] at the crate boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Startup configuration errors. Raised before any network access.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Key Vault URL is required")]
    MissingVaultUrl,

    #[error("invalid Key Vault URL '{0}': expected an http(s) URL")]
    InvalidVaultUrl(String),
}

/// Secret identifier errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NameError {
    #[error("invalid secret name format: {0}")]
    InvalidFormat(String),
}

/// Secret store errors.
///
/// `Connection` and `Rejected` are fatal for a run; the rest only affect a
/// single secret.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot access Key Vault {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("Key Vault {url} rejected the credentials: {reason}")]
    Rejected { url: String, reason: String },

    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("access denied to secret: {0}")]
    AccessDenied(String),

    #[error("failed to fetch secret '{name}': {reason}")]
    Fetch { name: String, reason: String },
}

/// Token acquisition errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{source_name} authentication failed: {reason}")]
    Failed {
        source_name: &'static str,
        reason: String,
    },

    #[error("no credential source could produce a token ({})", .0.join("; "))]
    Unavailable(Vec<String>),
}

/// Output file errors.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize credentials: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

impl Error {
    /// Whether this error stops the whole run rather than a single secret.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::Name(_)
                | Error::Store(StoreError::NotFound(_))
                | Error::Store(StoreError::AccessDenied(_))
                | Error::Store(StoreError::Fetch { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
