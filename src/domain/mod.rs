//! Domain layer for kaudit-auth
//!
//! Client handle models, pipeline errors and the port traits implemented by
//! the infrastructure adapters.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{
    AuthError, AuthResult, BoxError, InvalidSourceReason, LoaderError, ResolveError, Stage,
};
