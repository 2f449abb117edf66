//! kaudit-auth - Kubernetes authentication from kubeconfig documents
//!
//! Loads kubeconfig bytes from a pluggable credential source, resolves the
//! current context into a connection config and builds typed
//! ([`NativeClient`]) or dynamic ([`DynamicClient`]) API clients from it.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): client handles, pipeline errors and port traits
//! - **Infrastructure Layer** (`infrastructure`): filesystem loader, kube adapters,
//!   configuration and logging
//! - **CLI Layer** (`cli`): the `kaudit-auth` command-line interface
//!
//! # Example
//!
//! ```no_run
//! use kaudit_auth::{Authenticator, FileCredentialLoader, KubeConfigAuthenticator};
//!
//! # async fn run() -> Result<(), kaudit_auth::AuthError> {
//! let loader = FileCredentialLoader::new("/home/me/.kube/config");
//! let authenticator = KubeConfigAuthenticator::new(loader);
//!
//! let native = authenticator.native_api().await?;
//! let pods = native.default_namespaced::<k8s_openapi::api::core::v1::Pod>();
//! # let _ = pods;
//! let dynamic = authenticator.dynamic_api().await?;
//! # let _ = dynamic;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::{
    AuthError, AuthResult, BoxError, InvalidSourceReason, LoaderError, ResolveError, Stage,
};
pub use domain::models::{Config, ConnectionConfig, DynamicClient, NativeClient};
pub use domain::ports::{Authenticator, ClientFactory, CredentialLoader};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credentials::FileCredentialLoader;
pub use infrastructure::kubernetes::{
    parse_kubeconfig, resolve_connection_config, KubeClientFactory, KubeConfigAuthenticator,
};
