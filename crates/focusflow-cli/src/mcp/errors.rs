//! Error handling utilities for MCP server

use focusflow_core::FlowError;
use rmcp::ErrorData;

/// Convert planner errors to MCP errors.
///
/// Problems with the caller's request become `invalid_params`; storage and
/// other server-side failures become `internal_error`.
pub fn to_mcp_error(message: &str, error: &FlowError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        FlowError::InvalidInput { .. }
        | FlowError::PlanNotFound { .. }
        | FlowError::MalformedPlan { .. }
        | FlowError::PreconditionFailed { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
