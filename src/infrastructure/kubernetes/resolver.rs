//! Kubeconfig parsing and current-context resolution.

use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::debug;

use crate::domain::errors::ResolveError;
use crate::domain::models::ConnectionConfig;

/// Parse raw credential bytes into a kubeconfig document
///
/// Empty or whitespace-only input is rejected before it reaches the YAML
/// parser, so a client is never built from an empty document.
pub fn parse_kubeconfig(bytes: &[u8]) -> Result<Kubeconfig, ResolveError> {
    let text = std::str::from_utf8(bytes)?;
    if text.trim().is_empty() {
        return Err(ResolveError::EmptyDocument);
    }

    Kubeconfig::from_yaml(text).map_err(ResolveError::Parse)
}

/// Resolve the current context of `bytes` into a connection config
///
/// No overrides are applied: the context, cluster and user are exactly the
/// ones named by `current-context`.
pub async fn resolve_connection_config(bytes: &[u8]) -> Result<ConnectionConfig, ResolveError> {
    let kubeconfig = parse_kubeconfig(bytes)?;
    check_user_reference(&kubeconfig)?;
    let current_context = kubeconfig.current_context.clone();

    let config = ConnectionConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(ResolveError::Context)?;

    debug!(
        context = current_context.as_deref().unwrap_or_default(),
        cluster_url = %config.cluster_url,
        namespace = %config.default_namespace,
        "connection config resolved"
    );
    Ok(config)
}

/// Reject a current context whose `user` names no entry under `users`.
///
/// kube falls back to anonymous auth for an unknown user instead of failing.
fn check_user_reference(kubeconfig: &Kubeconfig) -> Result<(), ResolveError> {
    let Some(current) = kubeconfig.current_context.as_deref() else {
        return Ok(());
    };
    let user = kubeconfig
        .contexts
        .iter()
        .find(|named| named.name == current)
        .and_then(|named| named.context.as_ref())
        .and_then(|context| context.user.as_deref())
        .filter(|user| !user.is_empty());

    match user {
        Some(user) if !kubeconfig.auth_infos.iter().any(|info| info.name == user) => {
            Err(ResolveError::UnknownUser {
                context: current.to_string(),
                user: user.to_string(),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r"
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

    const NO_CURRENT_CONTEXT: &str = r"
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

    const DANGLING_CLUSTER: &str = r"
apiVersion: v1
kind: Config
clusters: []
contexts:
- context:
    cluster: missing-cluster
    user: test-user
  name: test-context
current-context: test-context
users:
- name: test-user
  user: {}
";

    const DANGLING_USER: &str = r"
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

    const NO_SERVER: &str = r"
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

    #[test]
    fn test_parse_rejects_invalid_yaml() {
        let err = parse_kubeconfig(b"invalid yaml").unwrap_err();
        assert!(matches!(err, ResolveError::Parse(_)));
        assert!(err.is_parse_failure());
    }

    #[test]
    fn test_parse_rejects_empty_document() {
        assert!(matches!(
            parse_kubeconfig(b"").unwrap_err(),
            ResolveError::EmptyDocument
        ));
        assert!(matches!(
            parse_kubeconfig(b"  \n\t\n").unwrap_err(),
            ResolveError::EmptyDocument
        ));
    }

    #[test]
    fn test_parse_rejects_non_utf8() {
        let err = parse_kubeconfig(&[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(matches!(err, ResolveError::Encoding(_)));
        assert!(err.is_parse_failure());
    }

    #[test]
    fn test_parse_keeps_current_context() {
        let kubeconfig = parse_kubeconfig(VALID.as_bytes()).expect("valid kubeconfig");
        assert_eq!(kubeconfig.current_context.as_deref(), Some("test-context"));
        assert_eq!(kubeconfig.contexts.len(), 1);
        assert_eq!(kubeconfig.clusters.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_valid_config() {
        let config = resolve_connection_config(VALID.as_bytes())
            .await
            .expect("context should resolve");

        assert_eq!(config.cluster_url.host(), Some("kubernetes.default.svc"));
        assert_eq!(config.cluster_url.scheme_str(), Some("https"));
        assert_eq!(config.default_namespace, "default");
    }

    #[tokio::test]
    async fn test_resolve_without_current_context() {
        let err = resolve_connection_config(NO_CURRENT_CONTEXT.as_bytes())
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Context(_)));
        assert!(err.is_context_failure());
    }

    #[tokio::test]
    async fn test_resolve_with_dangling_cluster() {
        let err = resolve_connection_config(DANGLING_CLUSTER.as_bytes())
            .await
            .unwrap_err();
        assert!(err.is_context_failure());
    }

    #[tokio::test]
    async fn test_resolve_with_dangling_user() {
        let err = resolve_connection_config(DANGLING_USER.as_bytes())
            .await
            .unwrap_err();
        assert!(err.is_context_failure());
        match err {
            ResolveError::UnknownUser { context, user } => {
                assert_eq!(context, "test-context");
                assert_eq!(user, "ghost");
            }
            other => panic!("Expected UnknownUser error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_without_server() {
        let err = resolve_connection_config(NO_SERVER.as_bytes())
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Context(_)));
        assert!(err.is_context_failure());
    }

    #[tokio::test]
    async fn test_resolve_propagates_parse_failure() {
        let err = resolve_connection_config(b"invalid yaml").await.unwrap_err();
        assert!(err.is_parse_failure());
    }
}
