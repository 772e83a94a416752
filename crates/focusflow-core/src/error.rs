//! Error types for the FocusFlow core library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all FocusFlow operations.
#[derive(Error, Debug)]
pub enum FlowError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// An operation was attempted from a state that does not permit it
    #[error("Cannot {operation}: {reason}")]
    PreconditionFailed { operation: String, reason: String },
    /// A plan that cannot be executed (no blocks, zero-minute blocks)
    #[error("Malformed plan: {reason}")]
    MalformedPlan { reason: String },
    /// A collaborator (generation, lookup, persistence, summary) failed
    #[error("Failed to {action}: {source}")]
    Collaborator {
        action: String,
        #[source]
        source: Box<FlowError>,
    },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> FlowError {
        FlowError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> FlowError {
        FlowError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Builder for precondition failures raised by state transitions.
pub struct PreconditionBuilder {
    operation: String,
}

impl PreconditionBuilder {
    /// Create a builder for the named operation (e.g. "start session").
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }

    /// Build the error with the reason the operation was refused.
    pub fn because(self, reason: impl Into<String>) -> FlowError {
        FlowError::PreconditionFailed {
            operation: self.operation,
            reason: reason.into(),
        }
    }
}

impl FlowError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a builder for precondition failures.
    pub fn precondition(operation: impl Into<String>) -> PreconditionBuilder {
        PreconditionBuilder::new(operation)
    }

    /// Creates a malformed plan error.
    pub fn malformed_plan(reason: impl Into<String>) -> Self {
        FlowError::MalformedPlan {
            reason: reason.into(),
        }
    }

    /// Wraps an error returned by a collaborator for the named action.
    ///
    /// Precondition failures and malformed plans pass through unchanged so
    /// callers can still classify them.
    pub fn collaborator(action: impl Into<String>, source: FlowError) -> Self {
        match source {
            FlowError::PreconditionFailed { .. }
            | FlowError::MalformedPlan { .. }
            | FlowError::Collaborator { .. } => source,
            other => FlowError::Collaborator {
                action: action.into(),
                source: Box::new(other),
            },
        }
    }

    /// Whether the error is a refused state transition.
    pub fn is_precondition_failed(&self) -> bool {
        matches!(self, FlowError::PreconditionFailed { .. })
    }

    /// Whether the error came from a collaborator, including responses that
    /// were rejected as malformed.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            FlowError::Collaborator { .. } | FlowError::MalformedPlan { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| FlowError::database(message).with_source(e))
    }
}

/// Result type alias for FocusFlow operations
pub type Result<T> = std::result::Result<T, FlowError>;
