//! Reflection records captured after a session.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Mood;

/// A persisted, read-only reflection on one session of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reflection {
    /// Identifier assigned on persistence
    pub id: String,
    /// Plan the session ran
    pub plan_id: String,
    pub mood: Mood,
    /// Free text, possibly empty
    #[serde(default)]
    pub notes: String,
    /// Timestamp assigned on persistence (UTC)
    pub created_at: Timestamp,
}
