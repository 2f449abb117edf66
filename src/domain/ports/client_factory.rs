use crate::domain::errors::BoxError;
use crate::domain::models::{ConnectionConfig, DynamicClient, NativeClient};

/// Port for building client handles from a resolved connection config
///
/// The default adapter delegates to `kube::Client`; tests substitute fakes to
/// exercise the construction stage without a cluster.
pub trait ClientFactory: Send + Sync {
    /// Build a typed client
    fn native(&self, config: ConnectionConfig) -> Result<NativeClient, BoxError>;

    /// Build a dynamic client
    fn dynamic(&self, config: ConnectionConfig) -> Result<DynamicClient, BoxError>;
}

impl<T: ClientFactory + ?Sized> ClientFactory for std::sync::Arc<T> {
    fn native(&self, config: ConnectionConfig) -> Result<NativeClient, BoxError> {
        (**self).native(config)
    }

    fn dynamic(&self, config: ConnectionConfig) -> Result<DynamicClient, BoxError> {
        (**self).dynamic(config)
    }
}
