use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VersionGenError};

/// Computes the version-stamped name for a build artifact.
///
/// The new name is `{project}-{friendly_version}` with the artifact's
/// original extension and directory preserved. Artifacts without an
/// extension get no trailing dot.
pub fn versioned_artifact_path(
    artifact: &Path,
    project: &str,
    friendly_version: &str,
) -> PathBuf {
    let mut file_name = format!("{}-{}", project, friendly_version);
    if let Some(ext) = artifact.extension().and_then(|e| e.to_str()) {
        file_name.push('.');
        file_name.push_str(ext);
    }

    match artifact.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

/// Renames `artifact` to its version-stamped name in place.
///
/// The rename stays within the artifact's directory, so it is atomic on all
/// common filesystems. Fails if the source artifact does not exist.
///
/// # Returns
/// * `Ok(PathBuf)` - the new artifact path
pub fn rename_artifact(artifact: &Path, project: &str, friendly_version: &str) -> Result<PathBuf> {
    if !artifact.exists() {
        return Err(VersionGenError::artifact(format!(
            "artifact not found: {}",
            artifact.display()
        )));
    }
    if !artifact.is_file() {
        return Err(VersionGenError::artifact(format!(
            "artifact is not a file: {}",
            artifact.display()
        )));
    }

    let target = versioned_artifact_path(artifact, project, friendly_version);
    fs::rename(artifact, &target)?;
    Ok(target)
}
