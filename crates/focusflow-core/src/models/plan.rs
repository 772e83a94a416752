//! Plan model definition and related functionality.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{block::MAX_BLOCK_MINUTES, Block, Intensity, Mode};
use crate::error::{FlowError, Result};

/// A complete, immutable plan: metadata plus its ordered blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: String,

    /// What the user is working on
    pub task: String,

    /// Requested time budget; the block sum is expected, not required, to match
    pub total_minutes: u32,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    #[serde(default)]
    pub mode: Mode,

    #[serde(default)]
    pub intensity: Intensity,

    /// One-line coaching tip shown with the plan
    #[serde(default)]
    pub focus_tip: String,

    /// Expected energy ("low", "medium", "high")
    #[serde(default)]
    pub energy_level: String,

    /// Ordered work blocks
    #[serde(rename = "plan")]
    pub blocks: Vec<Block>,
}

impl Plan {
    /// Sum of all block durations in minutes.
    pub fn block_minutes(&self) -> u64 {
        sum_minutes(&self.blocks)
    }

    /// Checks that the plan can be executed block by block.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::MalformedPlan` when the plan has no blocks or a
    /// block is zero or longer than [`MAX_BLOCK_MINUTES`].
    pub fn ensure_runnable(&self) -> Result<()> {
        ensure_runnable_blocks(&self.blocks)
    }
}

pub(crate) fn ensure_runnable_blocks(blocks: &[Block]) -> Result<()> {
    if blocks.is_empty() {
        return Err(FlowError::malformed_plan("plan has no blocks"));
    }
    if let Some((index, block)) = blocks.iter().enumerate().find(|(_, b)| b.minutes == 0) {
        return Err(FlowError::malformed_plan(format!(
            "block {} ('{}') has no duration",
            index + 1,
            block.title
        )));
    }
    ensure_block_lengths(blocks)
}

/// Rejects blocks longer than [`MAX_BLOCK_MINUTES`].
pub(crate) fn ensure_block_lengths(blocks: &[Block]) -> Result<()> {
    if let Some((index, block)) = blocks
        .iter()
        .enumerate()
        .find(|(_, b)| b.minutes > MAX_BLOCK_MINUTES)
    {
        return Err(FlowError::malformed_plan(format!(
            "block {} ('{}') lasts {} minutes, more than {MAX_BLOCK_MINUTES}",
            index + 1,
            block.title,
            block.minutes
        )));
    }
    Ok(())
}

/// Sum of block durations, wide enough for any number of blocks.
pub(crate) fn sum_minutes(blocks: &[Block]) -> u64 {
    blocks.iter().map(|b| u64::from(b.minutes)).sum()
}

/// A plan as produced by a generator, before it is assigned an identity.
///
/// This is also the JSON shape accepted when importing plans produced
/// elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanDraft {
    pub task: String,
    /// Budget in minutes; zero takes the sum of the blocks
    #[serde(default)]
    pub total_minutes: u32,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub intensity: Intensity,
    #[serde(default)]
    pub focus_tip: String,
    #[serde(default)]
    pub energy_level: String,
    #[serde(rename = "plan", default)]
    pub blocks: Vec<Block>,
}

impl PlanDraft {
    /// Assigns identity to the draft.
    pub fn into_plan(self, id: String, created_at: Timestamp) -> Plan {
        Plan {
            id,
            task: self.task,
            total_minutes: self.total_minutes,
            created_at,
            mode: self.mode,
            intensity: self.intensity,
            focus_tip: self.focus_tip,
            energy_level: self.energy_level,
            blocks: self.blocks,
        }
    }
}
