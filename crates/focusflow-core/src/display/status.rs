//! One-line outcome messages for commands and tools.

use std::fmt;

/// Outcome of a user-facing operation, rendered as a prefixed line.
///
/// Errors are not represented here; they travel as [`crate::FlowError`] and
/// are reported by the surface that ran the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    /// The operation took effect
    Success(String),
    /// The user chose not to go through with it; nothing was stored
    Skipped(String),
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        OperationStatus::Success(message.into())
    }

    pub fn skipped(message: impl Into<String>) -> Self {
        OperationStatus::Skipped(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            OperationStatus::Success(message) | OperationStatus::Skipped(message) => message,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationStatus::Success(_) => "Success:",
            OperationStatus::Skipped(_) => "Skipped:",
        };
        writeln!(f, "{label} {}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let saved = OperationStatus::success("Reflection saved.");
        assert_eq!(saved.to_string(), "Success: Reflection saved.\n");

        let skipped = OperationStatus::skipped(format!("No mood given for {}.", "plan-1"));
        assert_eq!(skipped.message(), "No mood given for plan-1.");
        assert_eq!(skipped.to_string(), "Skipped: No mood given for plan-1.\n");
    }
}
