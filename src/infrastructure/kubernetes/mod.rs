//! Kubernetes integration
//!
//! Kubeconfig resolution, client construction and the authenticator adapter,
//! all delegating to the `kube` crate.

pub mod authenticator;
pub mod factory;
pub mod resolver;

pub use authenticator::KubeConfigAuthenticator;
pub use factory::KubeClientFactory;
pub use resolver::{parse_kubeconfig, resolve_connection_config};
