//! Parameter structures for FocusFlow operations
//!
//! These are the request shapes of the collaborator contracts (plan
//! generation, lookup, history, reflection submission, weekly summary). They
//! carry no interface-specific attributes so that every surface can reuse them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The CLI converts its clap argument structs with `From` impls; the MCP
//! server wraps these types transparently and derives their JSON schema behind
//! the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Intensity, Mode, Mood};

/// Default number of plans returned by a history listing.
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

/// Default number of recent plans considered by the weekly summary.
pub const DEFAULT_SUMMARY_LIMIT: u32 = 20;

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: String,
}

/// Parameters for generating a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    /// What the user is working on (required, not blank)
    pub task: String,
    /// Time budget in minutes (must be positive)
    pub total_minutes: u32,
    /// Kind of work: study, coding or admin
    #[serde(default)]
    pub mode: Mode,
    /// Pace: chill, normal or grind
    #[serde(default)]
    pub intensity: Intensity,
}

impl Default for GeneratePlan {
    fn default() -> Self {
        Self {
            task: String::new(),
            total_minutes: 60,
            mode: Mode::default(),
            intensity: Intensity::default(),
        }
    }
}

/// Parameters for listing past plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListHistory {
    /// Maximum number of plans to return, newest first
    #[serde(default = "default_history_limit")]
    pub limit: u32,
}

impl Default for ListHistory {
    fn default() -> Self {
        Self {
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

fn default_history_limit() -> u32 {
    DEFAULT_HISTORY_LIMIT
}

/// Parameters for persisting a reflection on a finished session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SubmitReflection {
    /// Plan the session ran
    pub plan_id: String,
    /// great, ok or tired
    pub mood: Mood,
    /// Optional free-text notes
    #[serde(default)]
    pub notes: String,
}

/// Parameters for the weekly summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SummarizeWeek {
    /// Number of most recent plans to consider
    #[serde(default = "default_summary_limit")]
    pub limit: u32,
}

impl Default for SummarizeWeek {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUMMARY_LIMIT,
        }
    }
}

fn default_summary_limit() -> u32 {
    DEFAULT_SUMMARY_LIMIT
}
