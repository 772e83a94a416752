//! Block model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Longest block a runnable plan may contain: one day.
pub const MAX_BLOCK_MINUTES: u32 = 24 * 60;

/// One timed unit of work within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Block {
    /// Short name of the block
    pub title: String,

    /// Duration in whole minutes (positive for any runnable plan)
    pub minutes: u32,

    /// What to do during the block
    #[serde(default)]
    pub details: String,

    /// Difficulty label ("easy", "medium", "hard")
    #[serde(default)]
    pub difficulty: String,
}

impl Block {
    /// Creates a block.
    pub fn new(
        title: impl Into<String>,
        minutes: u32,
        details: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            minutes,
            details: details.into(),
            difficulty: difficulty.into(),
        }
    }

    /// Countdown length of the block.
    ///
    /// Exact for every block up to [`MAX_BLOCK_MINUTES`], which is all a
    /// runnable plan contains.
    pub fn seconds(&self) -> u32 {
        self.minutes.saturating_mul(60)
    }
}
