//! Plan summary types used by history listings.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Intensity, Mode, Plan};

/// History entry for a previously generated plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Task the plan was made for
    pub task: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Requested time budget
    pub total_minutes: u32,
    pub mode: Mode,
    pub intensity: Intensity,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone(),
            task: plan.task.clone(),
            created_at: plan.created_at,
            total_minutes: plan.total_minutes,
            mode: plan.mode,
            intensity: plan.intensity,
        }
    }
}
