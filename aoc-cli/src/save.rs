//! Writing fetched content to local files

use crate::error::CliError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write `content` to `path`
///
/// Without `overwrite`, an existing file is left untouched and `FileExists` is
/// returned. The existence check and the write are separate steps and are not
/// guarded against other processes. Parent directories are not created.
pub fn save(path: &Path, content: &str, overwrite: bool) -> Result<(), CliError> {
    if !overwrite && path.exists() {
        return Err(CliError::FileExists {
            path: path.to_path_buf(),
        });
    }

    fs::write(path, content).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "saved");
    Ok(())
}
