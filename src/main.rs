//! kaudit-auth CLI entry point.

use clap::Parser;

use kaudit_auth::cli::{commands, handle_error, Cli, Commands};
use kaudit_auth::infrastructure::config::ConfigLoader;
use kaudit_auth::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    // Keeps the file writer alive until exit.
    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args, &config, cli.json).await,
        Commands::Contexts(args) => commands::contexts::execute(args, &config, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
