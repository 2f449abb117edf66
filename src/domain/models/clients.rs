//! Client handles produced by the authenticator.
//!
//! Both handles wrap a [`kube::Client`] bound to one resolved connection
//! config. They are cheap to clone and owned entirely by the caller.

use http::Uri;
use k8s_openapi::NamespaceResourceScope;
use kube::api::{Api, DynamicObject};
use kube::core::GroupVersionKind;
use kube::discovery::{self, ApiCapabilities, ApiResource, Scope};
use kube::{Client, Resource};

/// Resolved connection parameters for one kubeconfig context.
pub type ConnectionConfig = kube::Config;

/// Typed client bound to the statically known resource types of
/// `k8s-openapi` (and any other [`kube::Resource`] implementation).
#[derive(Clone)]
pub struct NativeClient {
    client: Client,
    cluster_url: Uri,
}

impl NativeClient {
    /// Wrap an existing client built from a config pointing at `cluster_url`.
    pub fn new(client: Client, cluster_url: Uri) -> Self {
        Self {
            client,
            cluster_url,
        }
    }

    /// API server URL of the resolved context.
    pub fn cluster_url(&self) -> &Uri {
        &self.cluster_url
    }

    /// Namespace selected by the resolved context (`default` when unset).
    pub fn default_namespace(&self) -> &str {
        self.client.default_namespace()
    }

    /// Namespaced API for `K` in `namespace`.
    pub fn namespaced<K>(&self, namespace: &str) -> Api<K>
    where
        K: Resource<Scope = NamespaceResourceScope>,
        <K as Resource>::DynamicType: Default,
    {
        Api::namespaced(self.client.clone(), namespace)
    }

    /// Namespaced API for `K` in the context's default namespace.
    pub fn default_namespaced<K>(&self) -> Api<K>
    where
        K: Resource<Scope = NamespaceResourceScope>,
        <K as Resource>::DynamicType: Default,
    {
        Api::default_namespaced(self.client.clone())
    }

    /// Cluster-wide API for `K`.
    pub fn all<K>(&self) -> Api<K>
    where
        K: Resource,
        <K as Resource>::DynamicType: Default,
    {
        Api::all(self.client.clone())
    }

    /// Version reported by the API server. Performs network I/O.
    pub async fn server_version(&self) -> kube::Result<String> {
        let info = self.client.apiserver_version().await?;
        Ok(info.git_version)
    }

    /// Underlying kube client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Consume the handle, returning the underlying kube client.
    pub fn into_inner(self) -> Client {
        self.client
    }
}

impl std::fmt::Debug for NativeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeClient")
            .field("cluster_url", &self.cluster_url)
            .field("default_namespace", &self.default_namespace())
            .finish_non_exhaustive()
    }
}

/// Schema-agnostic client operating on [`DynamicObject`]s whose type is only
/// known at runtime.
#[derive(Clone)]
pub struct DynamicClient {
    client: Client,
    cluster_url: Uri,
}

impl DynamicClient {
    /// Wrap an existing client built from a config pointing at `cluster_url`.
    pub fn new(client: Client, cluster_url: Uri) -> Self {
        Self {
            client,
            cluster_url,
        }
    }

    /// API server URL of the resolved context.
    pub fn cluster_url(&self) -> &Uri {
        &self.cluster_url
    }

    /// Namespace selected by the resolved context (`default` when unset).
    pub fn default_namespace(&self) -> &str {
        self.client.default_namespace()
    }

    /// API for `resource` in `namespace`.
    pub fn namespaced(&self, resource: &ApiResource, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, resource)
    }

    /// API for `resource` in the context's default namespace.
    pub fn default_namespaced(&self, resource: &ApiResource) -> Api<DynamicObject> {
        Api::default_namespaced_with(self.client.clone(), resource)
    }

    /// Cluster-wide API for `resource`.
    pub fn all(&self, resource: &ApiResource) -> Api<DynamicObject> {
        Api::all_with(self.client.clone(), resource)
    }

    /// Cluster-wide API for `gvk`, guessing the plural name locally.
    ///
    /// Use [`Self::discover`] when the plural or scope must come from the
    /// server.
    pub fn for_gvk(&self, gvk: &GroupVersionKind) -> Api<DynamicObject> {
        self.all(&ApiResource::from_gvk(gvk))
    }

    /// Ask the API server for the resource definition of `gvk`.
    ///
    /// Returns an API in the default namespace for namespaced kinds and a
    /// cluster-wide API otherwise. Performs network I/O.
    pub async fn discover(
        &self,
        gvk: &GroupVersionKind,
    ) -> kube::Result<(Api<DynamicObject>, ApiCapabilities)> {
        let (resource, caps) = discovery::pinned_kind(&self.client, gvk).await?;
        let api = if matches!(caps.scope, Scope::Namespaced) {
            self.default_namespaced(&resource)
        } else {
            self.all(&resource)
        };
        Ok((api, caps))
    }

    /// Version reported by the API server. Performs network I/O.
    pub async fn server_version(&self) -> kube::Result<String> {
        let info = self.client.apiserver_version().await?;
        Ok(info.git_version)
    }

    /// Underlying kube client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Consume the handle, returning the underlying kube client.
    pub fn into_inner(self) -> Client {
        self.client
    }
}

impl std::fmt::Debug for DynamicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicClient")
            .field("cluster_url", &self.cluster_url)
            .field("default_namespace", &self.default_namespace())
            .finish_non_exhaustive()
    }
}
