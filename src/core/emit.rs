//! Credentials file output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::core::domain::CredentialRecord;
use crate::error::{Result, WriteError};

/// Write `records` to `path` as a YAML sequence.
///
/// Missing parent directories are created. An existing file is overwritten.
/// Output is deterministic: identical records produce identical bytes.
///
/// # Errors
///
/// Returns `WriteError` if a directory cannot be created or the file cannot
/// be written.
pub fn emit(records: &[CredentialRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!(dir = %parent.display(), "ensuring output directory");
        fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let open_error = |source: std::io::Error| WriteError::Open {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(open_error)?;
    let mut writer = BufWriter::new(file);
    serde_yaml::to_writer(&mut writer, records).map_err(WriteError::Serialize)?;
    writer.flush().map_err(open_error)?;

    info!(path = %path.display(), records = records.len(), "wrote credentials");
    Ok(())
}
