use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

/// Writes `new_contents` to `path` only when it differs from what is already
/// there. A missing file counts as different; reads of an absent file are not
/// errors. Skipping identical writes keeps timestamps stable for build-system
/// incremental rebuilds.
///
/// # Returns
/// * `Ok(true)` - file was written
/// * `Ok(false)` - contents already matched, nothing touched
pub fn update_file(path: &Path, new_contents: &str) -> Result<bool> {
    let existing = match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    if existing.as_deref() == Some(new_contents) {
        return Ok(false);
    }

    fs::write(path, new_contents)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;
    use tempfile::tempdir;

    #[test]
    fn test_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.h");

        let written = update_file(&path, "#define VERSION \"1.2.3\"\n").unwrap();
        assert!(written);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "#define VERSION \"1.2.3\"\n"
        );
    }

    #[test]
    fn test_overwrites_on_change() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.h");
        fs::write(&path, "old contents").unwrap();

        let written = update_file(&path, "new contents").unwrap();
        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new contents");
    }

    #[test]
    fn test_identical_write_is_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.h");

        assert!(update_file(&path, "same").unwrap());
        assert!(!update_file(&path, "same").unwrap());
    }

    #[test]
    fn test_skipped_write_preserves_mtime() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.h");
        fs::write(&path, "stable").unwrap();
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let written = update_file(&path, "stable").unwrap();
        assert!(!written);

        let after = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(before, after);
        assert!(after <= SystemTime::now());
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-subdir").join("version.h");

        let result = update_file(&path, "contents");
        assert!(result.is_err());
    }
}
