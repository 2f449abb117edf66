//! Credentials management infrastructure
//!
//! Filesystem-backed kubeconfig loading:
//! - Source validation before any read
//! - Default source fixed at construction, per-call override
//! - `$KUBECONFIG` / `~/.kube/config` discovery

pub mod file_loader;

pub use file_loader::FileCredentialLoader;
