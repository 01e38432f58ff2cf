//! Error types for linkrank.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading graphs or ranking them.
///
/// Graph and parameter errors are deterministic validation failures raised
/// before any computation starts; none of them are retryable.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The graph has no nodes.
    #[error("Empty graph: at least one node is required")]
    EmptyGraph,

    /// An edge references an unknown node or carries an unusable weight.
    #[error("Invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        /// Source node ID as written in the edge
        from: String,
        /// Target node ID as written in the edge
        to: String,
        /// What is wrong with the edge
        reason: String,
    },

    /// A ranking parameter is out of its valid range.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name (e.g. "damping_factor")
        name: String,
        /// Why the value was rejected
        message: String,
    },

    /// Two nodes share the same ID.
    #[error("Duplicate node: {id}")]
    DuplicateNode {
        /// The repeated node ID
        id: String,
    },

    /// A named item (node, preset, ...) does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of item looked up
        kind: String,
        /// Identifier that was not found
        id: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error, optionally tied to a path.
    #[error("I/O error{}: {source}", .path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    Io {
        /// Path involved in the failed operation, if known
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for linkrank operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}

impl Error {
    /// Creates an invalid-edge error.
    pub fn invalid_edge<F, T, R>(from: F, to: T, reason: R) -> Self
    where
        F: Into<String>,
        T: Into<String>,
        R: Into<String>,
    {
        Error::InvalidEdge {
            from: from.into(),
            to: to.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid-parameter error.
    pub fn invalid_parameter<N, M>(name: N, message: M) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Error::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found<K, I>(kind: K, id: I) -> Self
    where
        K: Into<String>,
        I: Into<String>,
    {
        Error::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Returns whether this error comes from validating the graph or the
    /// ranking parameters, as opposed to loading or configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyGraph
                | Error::InvalidEdge { .. }
                | Error::InvalidParameter { .. }
                | Error::DuplicateNode { .. }
        )
    }
}
