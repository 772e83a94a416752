//! Read-only projection of a session for rendering.

use super::{
    progress::{progress_percent, Countdown},
    state::{Phase, SessionState},
};
use crate::models::{Block, Plan};

/// A session as the user sees it: current block, countdown and progress.
///
/// Display formatting lives in [`crate::display::session`].
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    plan: &'a Plan,
    state: SessionState,
}

impl<'a> SessionView<'a> {
    pub fn new(plan: &'a Plan, state: SessionState) -> Self {
        Self { plan, state }
    }

    pub fn plan(&self) -> &'a Plan {
        self.plan
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn block(&self) -> Option<&'a Block> {
        self.plan.blocks.get(self.state.current_block_index)
    }

    /// 1-based position of the current block.
    pub fn block_number(&self) -> usize {
        self.state.current_block_index + 1
    }

    pub fn block_count(&self) -> usize {
        self.plan.blocks.len()
    }

    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.state.completed_blocks(), self.block_count())
    }

    pub fn countdown(&self) -> Countdown {
        Countdown(self.state.seconds_remaining)
    }
}
