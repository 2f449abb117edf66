//! Port trait definitions (Hexagonal Architecture)
//!
//! - CredentialLoader: retrieval of raw kubeconfig bytes
//! - ClientFactory: construction of client handles from a resolved config
//! - Authenticator: the end-to-end pipeline handing out client handles
//!
//! Adapters in `infrastructure` implement these; tests substitute fakes.

pub mod authenticator;
pub mod client_factory;
pub mod credential_loader;

pub use authenticator::Authenticator;
pub use client_factory::ClientFactory;
pub use credential_loader::CredentialLoader;
