//! Check command: run the authenticator pipeline end to end.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::domain::ports::Authenticator;
use crate::infrastructure::credentials::FileCredentialLoader;
use crate::infrastructure::kubernetes::KubeConfigAuthenticator;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Kubeconfig to use instead of the configured default
    #[arg(short, long)]
    pub kubeconfig: Option<String>,

    /// Which client handles to build
    #[arg(long, value_enum, default_value_t = ClientKind::Both)]
    pub client: ClientKind,

    /// Also ask the API server for its version (network I/O)
    #[arg(long)]
    pub probe: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientKind {
    Native,
    Dynamic,
    Both,
}

impl ClientKind {
    const fn wants_native(self) -> bool {
        matches!(self, Self::Native | Self::Both)
    }

    const fn wants_dynamic(self) -> bool {
        matches!(self, Self::Dynamic | Self::Both)
    }
}

#[derive(Debug, Serialize)]
pub struct ClientReport {
    pub client: &'static str,
    pub cluster_url: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub source: String,
    pub clients: Vec<ClientReport>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("Kubeconfig: {}", self.source)];
        for report in &self.clients {
            let mut line = format!(
                "  {:<8} ok  {} (namespace: {})",
                report.client, report.cluster_url, report.namespace
            );
            if let Some(ref version) = report.server_version {
                line.push_str(&format!(", server {version}"));
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

/// Build the requested clients through `authenticator`
pub async fn run_check<A>(
    authenticator: &A,
    source: &str,
    kind: ClientKind,
    probe: bool,
) -> Result<CheckOutput>
where
    A: Authenticator + ?Sized,
{
    let mut clients = Vec::new();

    if kind.wants_native() {
        let client = authenticator
            .native_api()
            .await
            .context("Failed to build native client")?;
        let server_version = if probe {
            Some(
                client
                    .server_version()
                    .await
                    .context("Failed to reach API server with native client")?,
            )
        } else {
            None
        };
        clients.push(ClientReport {
            client: "native",
            cluster_url: client.cluster_url().to_string(),
            namespace: client.default_namespace().to_string(),
            server_version,
        });
    }

    if kind.wants_dynamic() {
        let client = authenticator
            .dynamic_api()
            .await
            .context("Failed to build dynamic client")?;
        let server_version = if probe {
            Some(
                client
                    .server_version()
                    .await
                    .context("Failed to reach API server with dynamic client")?,
            )
        } else {
            None
        };
        clients.push(ClientReport {
            client: "dynamic",
            cluster_url: client.cluster_url().to_string(),
            namespace: client.default_namespace().to_string(),
            server_version,
        });
    }

    Ok(CheckOutput {
        source: source.to_string(),
        clients,
    })
}

/// Handle the check command
pub async fn execute(args: CheckArgs, config: &Config, json: bool) -> Result<()> {
    let source = args
        .kubeconfig
        .unwrap_or_else(|| config.kubeconfig.path.clone());
    let authenticator = KubeConfigAuthenticator::new(FileCredentialLoader::new(source.clone()));

    let report = run_check(&authenticator, &source, args.client, args.probe).await?;
    output(&report, json);
    Ok(())
}
