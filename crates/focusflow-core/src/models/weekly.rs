//! Weekly summary aggregate.

use serde::{Deserialize, Serialize};

/// Read-only aggregate over recent sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklySummary {
    pub total_sessions: u32,
    pub total_minutes: u32,
    pub top_tasks: Vec<String>,
    pub themes: Vec<String>,
    pub suggestions: Vec<String>,
}
