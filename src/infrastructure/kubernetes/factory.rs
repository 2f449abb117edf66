use kube::Client;
use tracing::debug;

use crate::domain::errors::BoxError;
use crate::domain::models::{ConnectionConfig, DynamicClient, NativeClient};
use crate::domain::ports::ClientFactory;

/// Builds client handles with `kube::Client`
///
/// Must be called from within a Tokio runtime: the kube client spawns its
/// request buffer on construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct KubeClientFactory;

impl KubeClientFactory {
    /// Create the factory
    pub const fn new() -> Self {
        Self
    }

    fn build(config: ConnectionConfig) -> Result<(Client, http::Uri), BoxError> {
        let cluster_url = config.cluster_url.clone();
        let client = Client::try_from(config)?;
        debug!(cluster_url = %cluster_url, "kube client built");
        Ok((client, cluster_url))
    }
}

impl ClientFactory for KubeClientFactory {
    fn native(&self, config: ConnectionConfig) -> Result<NativeClient, BoxError> {
        let (client, cluster_url) = Self::build(config)?;
        Ok(NativeClient::new(client, cluster_url))
    }

    fn dynamic(&self, config: ConnectionConfig) -> Result<DynamicClient, BoxError> {
        let (client, cluster_url) = Self::build(config)?;
        Ok(DynamicClient::new(client, cluster_url))
    }
}
