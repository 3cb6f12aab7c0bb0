//! kvcreds - Materialize Azure Key Vault secrets as a test credentials file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   └── sync          # Vault → credentials file driver
//! └── core/             # Core library components
//!     ├── naming        # <org>-<category>[-<testName>] parser
//!     ├── collect       # Secrets → credential records
//!     ├── emit          # Records → YAML file
//!     ├── summary       # Per-organization report
//!     ├── config        # Settings resolved at startup
//!     ├── auth/         # Token credentials (static, service principal, az CLI)
//!     └── store/        # SecretStore trait, Key Vault and in-memory stores
//! ```
//!
//! # Example
//!
//! ```
//! use kvcreds::core::collect::collect;
//! use kvcreds::core::store::MemoryStore;
//!
//! let store = MemoryStore::new()
//!     .with_tagged_secret("acme-billing-retry-edge", "s3cret", &[("Username", "qa1")])
//!     .with_secret("bad", "ignored");
//!
//! let collection = collect(&store).unwrap();
//! assert_eq!(collection.records.len(), 1);
//! assert_eq!(collection.records[0].test_name.as_deref(), Some("retry-edge"));
//! assert_eq!(collection.skipped[0].identifier, "bad");
//! ```

pub mod cli;
pub mod core;
pub mod error;
