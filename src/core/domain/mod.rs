//! Domain types.

mod collection;
mod name;
mod record;
mod secret;

pub use collection::{Collection, SkippedSecret};
pub use name::ParsedName;
pub use record::{CredentialRecord, Credentials};
pub use secret::StoredSecret;
