//! Error types and exit codes for mazegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including an unreachable Dijkstra target)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed maze, graph invariant violations)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed maze or graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or searching a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph store invariants (exit code 3)
    #[error("vertex already present: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("invalid edge weight: {weight} (weights must be non-negative)")]
    InvalidWeight { weight: i64 },

    #[error("invalid maze: {reason}")]
    InvalidMaze { reason: String },

    // Search failures (exit code 1)
    #[error("no path exists from {from} to {to}")]
    NoPathExists { from: String, to: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex inserted twice
    pub fn duplicate_vertex(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a vertex that is not in the graph
    pub fn unknown_vertex(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an unreachable search target
    pub fn no_path(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        GraphError::NoPathExists {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for a maze description that cannot be used
    pub fn invalid_maze(reason: impl Into<String>) -> Self {
        GraphError::InvalidMaze {
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a file that could not be read
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::DuplicateVertex { .. }
            | GraphError::UnknownVertex { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::InvalidMaze { .. } => ExitCode::Data,

            GraphError::NoPathExists { .. }
            | GraphError::Io(_)
            | GraphError::Toml(_)
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::InvalidMaze { .. } => "invalid_maze",
            GraphError::NoPathExists { .. } => "no_path_exists",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for mazegraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
