//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - Credentials management (filesystem kubeconfig loading)
//! - Kubernetes client construction and kubeconfig resolution
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod credentials;
pub mod kubernetes;
pub mod logging;
