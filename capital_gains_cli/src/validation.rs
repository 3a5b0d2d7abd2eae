//! Local checks run before anything is uploaded. File type and size checks
//! follow the backend; the threshold check only rejects non-positive days.

use std::path::Path;

use anyhow::{bail, Context, Result};
use capital_gains_api::Upload;

/// Largest file the backend accepts.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const MIN_LTCG_THRESHOLD_DAYS: u32 = 1;

pub fn validate_ltcg_threshold_days(days: u32) -> Result<u32> {
    if days < MIN_LTCG_THRESHOLD_DAYS {
        bail!(
            "LTCG threshold must be at least {} day, got {}",
            MIN_LTCG_THRESHOLD_DAYS,
            days
        );
    }
    Ok(days)
}

/// Returns the file name, checking the extension (case-sensitive, like the
/// backend) when one is required.
pub fn validate_file_name(path: &Path, extension: Option<&str>, label: &str) -> Result<String> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        bail!("Invalid path for {} file: {}", label, path.display());
    };
    if let Some(extension) = extension {
        if name.rsplit('.').next() != Some(extension) || !name.contains('.') {
            bail!("Invalid file type for {} file", label);
        }
    }
    Ok(name.to_string())
}

/// Validates and reads a file into an [`Upload`].
pub fn load_upload(path: &Path, extension: Option<&str>, label: &str) -> Result<Upload> {
    let file_name = validate_file_name(path, extension, label)?;
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Cannot read {} file {}", label, path.display()))?;
    if !metadata.is_file() {
        bail!("{} is not a file", path.display());
    }
    if metadata.len() > MAX_UPLOAD_BYTES {
        bail!(
            "File too large. Maximum size: {}MB",
            MAX_UPLOAD_BYTES / 1024 / 1024
        );
    }
    let data = std::fs::read(path)
        .with_context(|| format!("Cannot read {} file {}", label, path.display()))?;
    Ok(Upload::new(&file_name, data))
}
