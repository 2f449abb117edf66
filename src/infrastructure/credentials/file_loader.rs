use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::errors::{InvalidSourceReason, LoaderError};
use crate::domain::models::default_kubeconfig_path;
use crate::domain::ports::CredentialLoader;

/// Loads kubeconfig bytes from the local filesystem
#[derive(Debug, Clone)]
pub struct FileCredentialLoader {
    path: String,
}

impl FileCredentialLoader {
    /// Create a loader whose default source is `path`
    ///
    /// The path is not checked here; validation happens on every load.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Create a loader defaulting to `$KUBECONFIG` or `~/.kube/config`
    pub fn from_default_location() -> Self {
        Self::new(default_kubeconfig_path())
    }

    /// Default source used by [`CredentialLoader::load`]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl CredentialLoader for FileCredentialLoader {
    fn load(&self) -> Result<Vec<u8>, LoaderError> {
        read_source(&self.path)
    }

    fn load_with_path(&self, path: &str) -> Result<Vec<u8>, LoaderError> {
        read_source(path)
    }
}

/// Check that `path` names an existing regular file
pub fn validate_source(path: &str) -> Result<(), LoaderError> {
    let invalid = |reason| LoaderError::InvalidSource {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Err(invalid(InvalidSourceReason::Empty));
    }

    // Follows symlinks, so a link to a regular file is accepted.
    let metadata = match fs::metadata(Path::new(path)) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(invalid(InvalidSourceReason::NotFound));
        }
        Err(_) => return Err(invalid(InvalidSourceReason::Inaccessible)),
    };

    if !metadata.is_file() {
        return Err(invalid(InvalidSourceReason::NotAFile));
    }

    Ok(())
}

fn read_source(path: &str) -> Result<Vec<u8>, LoaderError> {
    if let Err(err) = validate_source(path) {
        warn!(path, error = %err, "credential source rejected");
        return Err(err);
    }

    let bytes = fs::read(path).map_err(|source| {
        warn!(path, error = %source, "credential source read failed");
        LoaderError::ReadFailure {
            path: path.to_string(),
            source,
        }
    })?;

    debug!(path, len = bytes.len(), "credential source loaded");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn temp_file_with(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    fn path_of(file: &NamedTempFile) -> String {
        file.path().to_str().unwrap().to_string()
    }

    #[test]
    fn test_load_returns_exact_bytes() {
        let file = temp_file_with(b"valid-kube-config-data");
        let loader = FileCredentialLoader::new(path_of(&file));

        let bytes = loader.load().expect("load should succeed");
        assert_eq!(bytes, b"valid-kube-config-data");
    }

    #[test]
    fn test_load_empty_file_is_not_an_error() {
        let file = temp_file_with(b"");
        let loader = FileCredentialLoader::new(path_of(&file));

        let bytes = loader.load().expect("empty file should load");
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_load_empty_path() {
        let loader = FileCredentialLoader::new("");

        let err = loader.load().unwrap_err();
        assert!(matches!(
            err,
            LoaderError::InvalidSource {
                reason: InvalidSourceReason::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_load_missing_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("non-existent.yaml");
        let loader = FileCredentialLoader::new(missing.to_str().unwrap());

        let err = loader.load().unwrap_err();
        assert!(matches!(
            err,
            LoaderError::InvalidSource {
                reason: InvalidSourceReason::NotFound,
                ..
            }
        ));
        assert_eq!(err.path(), missing.to_str().unwrap());
    }

    #[test]
    fn test_load_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let loader = FileCredentialLoader::new(dir.path().to_str().unwrap());

        let err = loader.load().unwrap_err();
        assert!(matches!(
            err,
            LoaderError::InvalidSource {
                reason: InvalidSourceReason::NotAFile,
                ..
            }
        ));
    }

    #[test]
    fn test_load_with_path_ignores_default() {
        let file = temp_file_with(b"override");
        let loader = FileCredentialLoader::new("");

        let bytes = loader
            .load_with_path(&path_of(&file))
            .expect("explicit path should load");
        assert_eq!(bytes, b"override");

        // The broken default is still broken.
        assert!(loader.load().unwrap_err().is_invalid_source());
    }

    #[test]
    fn test_load_with_path_empty() {
        let file = temp_file_with(b"default");
        let loader = FileCredentialLoader::new(path_of(&file));

        let err = loader.load_with_path("").unwrap_err();
        assert!(err.is_invalid_source());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_unreadable_regular_file_is_read_failure() {
        // Regular file per stat, but reading offset 0 fails with EIO.
        let loader = FileCredentialLoader::new("/proc/self/mem");

        let err = loader.load().unwrap_err();
        assert!(err.is_read_failure(), "unexpected error: {err}");
    }

    #[test]
    fn test_from_default_location_uses_kubeconfig_env() {
        temp_env::with_var("KUBECONFIG", Some("/opt/kube/admin.conf"), || {
            let loader = FileCredentialLoader::from_default_location();
            assert_eq!(loader.path(), "/opt/kube/admin.conf");
        });
    }
}
