//! Contexts command: list kubeconfig contexts.

use anyhow::{Context, Result};
use clap::Args;
use kube::config::{Kubeconfig, NamedContext};
use serde::Serialize;

use crate::cli::display::{list_table, render_list};
use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::Config;
use crate::domain::ports::CredentialLoader;
use crate::infrastructure::credentials::FileCredentialLoader;
use crate::infrastructure::kubernetes::parse_kubeconfig;

#[derive(Args, Debug)]
pub struct ContextsArgs {
    /// Kubeconfig to read instead of the configured default
    #[arg(short, long)]
    pub kubeconfig: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContextOutput {
    pub name: String,
    pub cluster: Option<String>,
    pub user: Option<String>,
    pub namespace: Option<String>,
    pub current: bool,
}

#[derive(Debug, Serialize)]
pub struct ContextListOutput {
    pub current_context: Option<String>,
    pub contexts: Vec<ContextOutput>,
    pub total: usize,
}

impl CommandOutput for ContextListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["", "name", "cluster", "user", "namespace"]);
        for context in &self.contexts {
            table.add_row(vec![
                (if context.current { "*" } else { "" }).to_string(),
                truncate(&context.name, 40),
                truncate(context.cluster.as_deref().unwrap_or("-"), 40),
                truncate(context.user.as_deref().unwrap_or("-"), 30),
                context.namespace.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        render_list("context", &table, self.total)
    }
}

/// Summarize the contexts of a parsed kubeconfig
pub fn summarize(kubeconfig: &Kubeconfig) -> ContextListOutput {
    let current_context = kubeconfig.current_context.clone();
    let contexts: Vec<ContextOutput> = kubeconfig
        .contexts
        .iter()
        .map(|named| context_output(named, current_context.as_deref()))
        .collect();

    ContextListOutput {
        current_context,
        total: contexts.len(),
        contexts,
    }
}

fn context_output(named: &NamedContext, current: Option<&str>) -> ContextOutput {
    let context = named.context.as_ref();

    ContextOutput {
        name: named.name.clone(),
        cluster: context
            .map(|c| c.cluster.clone())
            .filter(|cluster| !cluster.is_empty()),
        user: context.and_then(|c| c.user.clone()),
        namespace: context.and_then(|c| c.namespace.clone()),
        current: current == Some(named.name.as_str()),
    }
}

/// Handle the contexts command
pub fn execute(args: ContextsArgs, config: &Config, json: bool) -> Result<()> {
    let loader = FileCredentialLoader::new(config.kubeconfig.path.clone());
    let bytes = match args.kubeconfig {
        Some(ref path) => loader.load_with_path(path),
        None => loader.load(),
    }
    .context("Failed to load kubeconfig")?;

    let kubeconfig = parse_kubeconfig(&bytes).context("Failed to parse kubeconfig")?;
    output(&summarize(&kubeconfig), json);
    Ok(())
}
