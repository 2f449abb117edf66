use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use super::factory::KubeClientFactory;
use super::resolver::resolve_connection_config;
use crate::domain::errors::{AuthError, AuthResult, BoxError};
use crate::domain::models::{ConnectionConfig, DynamicClient, NativeClient};
use crate::domain::ports::{Authenticator, ClientFactory, CredentialLoader};

/// Authenticator backed by a kubeconfig document
///
/// Holds only its collaborators. Each request reloads and re-resolves the
/// kubeconfig, so concurrent callers share nothing mutable.
#[derive(Debug, Clone)]
pub struct KubeConfigAuthenticator<L, F = KubeClientFactory> {
    loader: L,
    factory: F,
}

impl<L: CredentialLoader> KubeConfigAuthenticator<L> {
    /// Create an authenticator using the kube client factory
    pub const fn new(loader: L) -> Self {
        Self {
            loader,
            factory: KubeClientFactory::new(),
        }
    }
}

impl<L: CredentialLoader, F: ClientFactory> KubeConfigAuthenticator<L, F> {
    /// Create an authenticator with a custom client factory
    pub const fn with_factory(loader: L, factory: F) -> Self {
        Self { loader, factory }
    }

    /// Credential loader this authenticator reads from
    pub const fn loader(&self) -> &L {
        &self.loader
    }

    async fn connection_config(&self) -> AuthResult<ConnectionConfig> {
        let bytes = self.loader.load().map_err(|err| {
            warn!(stage = "load", error = %err, "authentication failed");
            AuthError::Load(err)
        })?;

        let config = resolve_connection_config(&bytes).await.map_err(|err| {
            warn!(stage = %err.stage(), error = %err, "authentication failed");
            AuthError::Resolve(err)
        })?;

        Ok(config)
    }
}

fn construction_failed(err: BoxError) -> AuthError {
    warn!(stage = "construct", error = %err, "authentication failed");
    AuthError::ClientConstruction(err)
}

#[async_trait]
impl<L: CredentialLoader, F: ClientFactory> Authenticator for KubeConfigAuthenticator<L, F> {
    #[instrument(skip(self), name = "native_api")]
    async fn native_api(&self) -> AuthResult<NativeClient> {
        let config = self.connection_config().await?;
        let client = self.factory.native(config).map_err(construction_failed)?;
        debug!(cluster_url = %client.cluster_url(), "native client ready");
        Ok(client)
    }

    #[instrument(skip(self), name = "dynamic_api")]
    async fn dynamic_api(&self) -> AuthResult<DynamicClient> {
        let config = self.connection_config().await?;
        let client = self.factory.dynamic(config).map_err(construction_failed)?;
        debug!(cluster_url = %client.cluster_url(), "dynamic client ready");
        Ok(client)
    }
}
