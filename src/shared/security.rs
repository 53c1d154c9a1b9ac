use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates that a path exists and is a regular file
///
/// Symbolic links are followed here: deployments commonly link the
/// inventory tool into place.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "inventory tool")
///
/// # Errors
/// Returns an error if the path doesn't exist or is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates that a path is a regular file carrying at least one execute bit
///
/// # Errors
/// Returns an error if the file is missing, not a regular file, or not executable
pub fn validate_executable(path: &Path, file_description: &str) -> Result<()> {
    validate_regular_file(path, file_description)?;

    if !is_executable(path)? {
        anyhow::bail!("{} is not executable", path.display());
    }

    Ok(())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path)?.permissions().mode();
    Ok(mode & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> Result<bool> {
    Ok(true)
}
