pub mod clients;
pub mod config;

pub use clients::{ConnectionConfig, DynamicClient, NativeClient};
pub use config::{default_kubeconfig_path, Config, KubeconfigSettings};
