//! Domain errors for the kaudit authentication pipeline.
//!
//! Each error identifies the pipeline stage that failed and keeps the
//! underlying cause reachable through [`std::error::Error::source`].

use std::fmt;
use std::io;
use std::str::Utf8Error;

use kube::config::KubeconfigError;
use thiserror::Error;

/// Boxed error returned by client factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for authenticator operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Stage of the authenticator pipeline an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading raw credential bytes.
    Load,
    /// Parsing bytes into a kubeconfig document.
    Parse,
    /// Resolving the current context into a connection config.
    Resolve,
    /// Building the client handle.
    Construct,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Load => "load",
            Self::Parse => "parse",
            Self::Resolve => "resolve",
            Self::Construct => "construct",
        };
        f.write_str(name)
    }
}

/// Why a credential source failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSourceReason {
    /// The source identifier is empty.
    Empty,
    /// Nothing exists at the source path.
    NotFound,
    /// The path could not be inspected (e.g. a parent directory denies access).
    Inaccessible,
    /// The path exists but is not a regular file.
    NotAFile,
}

impl fmt::Display for InvalidSourceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Empty => "path is empty",
            Self::NotFound => "no such file",
            Self::Inaccessible => "path is not accessible",
            Self::NotAFile => "not a regular file",
        };
        f.write_str(reason)
    }
}

/// Errors raised by credential loaders.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The source was rejected before any read was attempted.
    #[error("invalid credential source {path:?}: {reason}")]
    InvalidSource {
        /// Source as supplied by the caller.
        path: String,
        /// Which validation rule rejected it.
        reason: InvalidSourceReason,
    },

    /// The source validated but reading it failed.
    #[error("failed to read credential source {path:?}: {source}")]
    ReadFailure {
        /// Source as supplied by the caller.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl LoaderError {
    /// Path of the source that failed.
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidSource { path, .. } | Self::ReadFailure { path, .. } => path,
        }
    }

    /// Returns true if the source was rejected before I/O.
    pub fn is_invalid_source(&self) -> bool {
        matches!(self, Self::InvalidSource { .. })
    }

    /// Returns true if the read itself failed.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::ReadFailure { .. })
    }
}

/// Errors raised while turning credential bytes into a connection config.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The credential document has no content.
    #[error("kubeconfig document is empty")]
    EmptyDocument,

    /// The credential bytes are not UTF-8 text.
    #[error("kubeconfig is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    /// The text is not a well-formed kubeconfig.
    #[error("failed to parse kubeconfig: {0}")]
    Parse(#[source] KubeconfigError),

    /// The current context could not be resolved.
    #[error("failed to resolve current context: {0}")]
    Context(#[source] KubeconfigError),

    /// The current context names a user with no entry under `users`.
    #[error("context {context:?} references unknown user {user:?}")]
    UnknownUser {
        /// Name of the current context.
        context: String,
        /// User name the context references.
        user: String,
    },
}

impl ResolveError {
    /// Pipeline stage this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Self::EmptyDocument | Self::Encoding(_) | Self::Parse(_) => Stage::Parse,
            Self::Context(_) | Self::UnknownUser { .. } => Stage::Resolve,
        }
    }

    /// Returns true for failures to parse the document at all.
    pub fn is_parse_failure(&self) -> bool {
        self.stage() == Stage::Parse
    }

    /// Returns true if the document parsed but its context did not resolve.
    pub fn is_context_failure(&self) -> bool {
        self.stage() == Stage::Resolve
    }
}

/// Errors surfaced by [`crate::domain::ports::Authenticator`] operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The credential loader failed.
    #[error("credential load failed")]
    Load(#[source] LoaderError),

    /// The kubeconfig could not be parsed or its context resolved.
    #[error("connection resolution failed")]
    Resolve(#[source] ResolveError),

    /// The client factory rejected the resolved configuration.
    #[error("client construction failed")]
    ClientConstruction(#[source] BoxError),
}

impl AuthError {
    /// Pipeline stage that failed first.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Load(_) => Stage::Load,
            Self::Resolve(err) => err.stage(),
            Self::ClientConstruction(_) => Stage::Construct,
        }
    }

    /// The loader error, if the load stage failed.
    pub fn as_loader_error(&self) -> Option<&LoaderError> {
        match self {
            Self::Load(err) => Some(err),
            _ => None,
        }
    }

    /// The resolution error, if parsing or context resolution failed.
    pub fn as_resolve_error(&self) -> Option<&ResolveError> {
        match self {
            Self::Resolve(err) => Some(err),
            _ => None,
        }
    }
}
