//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::check::CheckArgs;
use crate::cli::commands::contexts::ContextsArgs;

#[derive(Parser, Debug)]
#[command(name = "kaudit-auth")]
#[command(about = "Authenticate against a Kubernetes cluster from a kubeconfig", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load tool configuration from this file instead of .kaudit/
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build API clients from the kubeconfig and report where they point
    Check(CheckArgs),

    /// List the contexts defined in the kubeconfig
    Contexts(ContextsArgs),
}
