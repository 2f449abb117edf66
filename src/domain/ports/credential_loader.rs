use crate::domain::errors::LoaderError;

/// Port for retrieving raw kubeconfig bytes
///
/// Implementations validate the source identifier before any I/O and never
/// inspect the content they return.
pub trait CredentialLoader: Send + Sync {
    /// Load bytes from the loader's default source
    fn load(&self) -> Result<Vec<u8>, LoaderError>;

    /// Load bytes from `path`, ignoring the default source
    fn load_with_path(&self, path: &str) -> Result<Vec<u8>, LoaderError>;
}

impl<T: CredentialLoader + ?Sized> CredentialLoader for std::sync::Arc<T> {
    fn load(&self) -> Result<Vec<u8>, LoaderError> {
        (**self).load()
    }

    fn load_with_path(&self, path: &str) -> Result<Vec<u8>, LoaderError> {
        (**self).load_with_path(path)
    }
}
