use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// A precondition that must hold before any file is created.
#[derive(Debug)]
pub(crate) enum PreflightError {
    /// The process runs as the root user.
    RunningAsRoot,
    /// The current user could not be looked up.
    UserLookup(io::Error),
    /// The directory that should contain the output file does not exist.
    MissingDirectory(PathBuf),
    /// The output file exists and overwriting was not requested.
    FileExists(PathBuf),
    /// Inspecting the filesystem failed.
    Io(PathBuf, io::Error),
}

impl fmt::Display for PreflightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RunningAsRoot => write!(f, "This program should not be run as root."),
            Self::UserLookup(e) => {
                write!(f, "Failed to get the operating user information: {e}")
            }
            Self::MissingDirectory(dir) => {
                write!(f, "Directory '{}' does not exist.", dir.display())
            }
            Self::FileExists(path) => write!(
                f,
                "File '{}' already exists, use -o (--overwrite) to overwrite it.",
                path.display()
            ),
            Self::Io(path, e) => write!(f, "Failed to check '{}': {e}", path.display()),
        }
    }
}

/// Rejects execution by the root user, identified by a real uid of 0 or the name `root`.
#[cfg(unix)]
pub(crate) fn reject_root() -> Result<(), PreflightError> {
    use nix::unistd::{Uid, User};

    let uid = Uid::current();
    let user = User::from_uid(uid).map_err(|e| PreflightError::UserLookup(e.into()))?;
    if uid.is_root() || user.is_some_and(|u| u.name == "root") {
        return Err(PreflightError::RunningAsRoot);
    }
    Ok(())
}

#[cfg(not(unix))]
pub(crate) const fn reject_root() -> Result<(), PreflightError> {
    Ok(())
}

/// Trims surrounding whitespace and drops redundant separators and `.` components.
pub(crate) fn normalize_path(raw: &str) -> PathBuf {
    Path::new(raw.trim()).components().collect()
}

/// Checks that `path` can be created without clobbering anything unexpectedly.
pub(crate) fn check_target(path: &Path, overwrite: bool) -> Result<(), PreflightError> {
    if let Some(dir) = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty() && !d.is_dir())
    {
        return Err(PreflightError::MissingDirectory(dir.to_path_buf()));
    }

    let exists = path
        .try_exists()
        .map_err(|e| PreflightError::Io(path.to_path_buf(), e))?;
    if exists && !overwrite {
        return Err(PreflightError::FileExists(path.to_path_buf()));
    }
    Ok(())
}

/// Creates or truncates the output file.
pub(crate) fn create_sink(path: &Path) -> io::Result<File> {
    File::create(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_path("  data.txt \t"), PathBuf::from("data.txt"));
        assert_eq!(normalize_path("  ./a.txt  "), PathBuf::from("./a.txt"));
    }

    #[test]
    fn test_normalize_drops_redundant_components() {
        assert_eq!(normalize_path("out//./data.txt"), PathBuf::from("out/data.txt"));
        assert_eq!(normalize_path("out/data.txt/"), PathBuf::from("out/data.txt"));
    }

    #[test]
    fn test_normalize_blank_input_is_empty() {
        assert!(normalize_path("").as_os_str().is_empty());
        assert!(normalize_path("   ").as_os_str().is_empty());
    }

    #[test]
    fn test_check_target_accepts_new_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("new.txt");
        assert!(check_target(&path, false).is_ok());
    }

    #[test]
    fn test_check_target_rejects_existing_file_unless_overwriting() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("existing.txt");
        std::fs::write(&path, "x").expect("Failed to write file");

        assert!(matches!(
            check_target(&path, false),
            Err(PreflightError::FileExists(p)) if p == path
        ));
        assert!(check_target(&path, true).is_ok());
    }

    #[test]
    fn test_check_target_rejects_missing_directory() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing");
        let path = missing.join("data.txt");

        assert!(matches!(
            check_target(&path, false),
            Err(PreflightError::MissingDirectory(dir)) if dir == missing
        ));
    }

    #[test]
    fn test_create_sink_truncates() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sink.txt");
        std::fs::write(&path, "old content").expect("Failed to write file");

        drop(create_sink(&path).expect("Failed to create sink"));
        assert_eq!(std::fs::metadata(&path).expect("file exists").len(), 0);
    }
}
