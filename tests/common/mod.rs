//! Common test utilities for integration tests
//!
//! Kubeconfig fixtures, temp-file helpers and fake collaborators shared
//! across integration test files.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use kaudit_auth::{
    BoxError, ClientFactory, ConnectionConfig, CredentialLoader, DynamicClient, InvalidSourceReason,
    LoaderError, NativeClient,
};
use tempfile::TempDir;

/// One cluster, one user, one context marked current.
pub const VALID_KUBECONFIG: &str = r"
apiVersion: v1
kind: Config
clusters:
- cluster:
    server: https://kubernetes.default.svc
  name: test-cluster
contexts:
- context:
    cluster: test-cluster
    user: test-user
  name: test-context
current-context: test-context
users:
- name: test-user
  user: {}
";

/// Same document without `current-context`.
pub const KUBECONFIG_WITHOUT_CURRENT_CONTEXT: &str = r"
apiVersion: v1
kind: Config
clusters:
- cluster:
    server: https://kubernetes.default.svc
  name: test-cluster
contexts:
- context:
    cluster: test-cluster
    user: test-user
  name: test-context
users:
- name: test-user
  user: {}
";

/// Current context names a user missing from `users`.
pub const DANGLING_USER_KUBECONFIG: &str = r"
apiVersion: v1
kind: Config
clusters:
- cluster:
    server: https://kubernetes.default.svc
  name: test-cluster
contexts:
- context:
    cluster: test-cluster
    user: ghost
  name: test-context
current-context: test-context
users: []
";

/// Current context's cluster has no `server` endpoint.
pub const NO_SERVER_KUBECONFIG: &str = r"
apiVersion: v1
kind: Config
clusters:
- cluster: {}
  name: test-cluster
contexts:
- context:
    cluster: test-cluster
    user: test-user
  name: test-context
current-context: test-context
users:
- name: test-user
  user: {}
";

/// Valid kubeconfig pointing at a different cluster and namespace.
pub const ROTATED_KUBECONFIG: &str = r"
apiVersion: v1
kind: Config
clusters:
- cluster:
    server: https://rotated.example.com:6443
  name: rotated-cluster
contexts:
- context:
    cluster: rotated-cluster
    user: rotated-user
    namespace: audit
  name: rotated
current-context: rotated
users:
- name: rotated-user
  user:
    token: not-a-real-token
";

/// Create a temporary directory for test isolation
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `content` to `name` inside a fresh temp dir
///
/// The returned TempDir must outlive any use of the path.
pub fn write_kubeconfig(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write kubeconfig");
    (dir, path)
}

/// Setup test logging
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Loader returning fixed bytes and counting calls
pub struct StaticLoader {
    bytes: Mutex<Vec<u8>>,
    calls: AtomicUsize,
}

impl StaticLoader {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Mutex::new(bytes.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Swap the content returned by subsequent loads
    pub fn replace(&self, bytes: impl Into<Vec<u8>>) {
        *self.bytes.lock().unwrap() = bytes.into();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CredentialLoader for StaticLoader {
    fn load(&self) -> Result<Vec<u8>, LoaderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.bytes.lock().unwrap().clone())
    }

    fn load_with_path(&self, _path: &str) -> Result<Vec<u8>, LoaderError> {
        self.load()
    }
}

/// Loader that always fails validation
pub struct FailingLoader;

impl CredentialLoader for FailingLoader {
    fn load(&self) -> Result<Vec<u8>, LoaderError> {
        Err(LoaderError::InvalidSource {
            path: "/nowhere/kubeconfig".to_string(),
            reason: InvalidSourceReason::NotFound,
        })
    }

    fn load_with_path(&self, path: &str) -> Result<Vec<u8>, LoaderError> {
        Err(LoaderError::InvalidSource {
            path: path.to_string(),
            reason: InvalidSourceReason::NotFound,
        })
    }
}

/// Factory that rejects every config and counts attempts
#[derive(Default)]
pub struct RejectingFactory {
    attempts: AtomicUsize,
}

impl RejectingFactory {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl ClientFactory for RejectingFactory {
    fn native(&self, _config: ConnectionConfig) -> Result<NativeClient, BoxError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err("native client rejected".into())
    }

    fn dynamic(&self, _config: ConnectionConfig) -> Result<DynamicClient, BoxError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err("dynamic client rejected".into())
    }
}
