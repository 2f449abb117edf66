//! Command-line interface for kaudit-auth.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::domain::errors::AuthError;

/// Print `err` with its cause chain and exit non-zero
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    let stage = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<AuthError>())
        .map(AuthError::stage);

    if json {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "error": err.to_string(),
            "stage": stage.map(|s| s.to_string()),
            "causes": causes,
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        if let Some(stage) = stage {
            eprintln!("  failed stage: {stage}");
        }
    }

    std::process::exit(1);
}
