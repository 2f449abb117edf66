use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::infrastructure::logging::LogConfig;

/// Main configuration structure for kaudit-auth
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Credential source settings
    #[serde(default)]
    pub kubeconfig: KubeconfigSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

/// Where the default kubeconfig lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KubeconfigSettings {
    /// Path used by the credential loader when no path is given per call
    #[serde(default = "default_kubeconfig_path")]
    pub path: String,
}

impl Default for KubeconfigSettings {
    fn default() -> Self {
        Self {
            path: default_kubeconfig_path(),
        }
    }
}

/// Default kubeconfig location.
///
/// First entry of `$KUBECONFIG` when set, else `~/.kube/config`. Empty when
/// neither can be determined.
pub fn default_kubeconfig_path() -> String {
    if let Some(paths) = env::var_os("KUBECONFIG") {
        if let Some(first) = env::split_paths(&paths).find(|p| !p.as_os_str().is_empty()) {
            return first.to_string_lossy().into_owned();
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".kube").join("config"))
        .map(|path: PathBuf| path.to_string_lossy().into_owned())
        .unwrap_or_default()
}
