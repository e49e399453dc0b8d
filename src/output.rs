//! Output artifact naming and directory handling

use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use tracing::info;

/// Filename prefix for generated artifacts
pub const FILE_PREFIX: &str = "QRCode_";

/// Build the artifact filename for a generation instant.
///
/// Timestamps are second-granular; two runs within the same second
/// produce the same name and the later one overwrites the earlier.
pub fn timestamped_filename(now: DateTime<Local>) -> String {
    format!("{FILE_PREFIX}{}.png", now.format("%Y%m%d%H%M%S"))
}

/// Create `path` and any missing parents. Existing directories are left
/// untouched.
pub fn ensure_directory(path: &Path) -> Result<()> {
    info!(
        "Checking if directory {} exists or needs to be created",
        path.display()
    );

    fs::create_dir_all(path).map_err(|source| Error::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Directory {} is ready for use", path.display());
    Ok(())
}
