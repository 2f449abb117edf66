use async_trait::async_trait;

use crate::domain::errors::AuthResult;
use crate::domain::models::{DynamicClient, NativeClient};

/// Port for obtaining Kubernetes API clients
///
/// Every call runs the full load, parse, resolve and construct pipeline.
/// Nothing is cached between calls, so a rotated kubeconfig is picked up on
/// the next request.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Build a client for statically typed resources
    async fn native_api(&self) -> AuthResult<NativeClient>;

    /// Build a client for resources known only at runtime
    async fn dynamic_api(&self) -> AuthResult<DynamicClient>;
}
