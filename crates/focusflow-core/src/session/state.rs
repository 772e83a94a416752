//! Tagged session state and its pure transitions.

use serde::Serialize;

use crate::{
    error::{FlowError, Result},
    models::{plan::ensure_runnable_blocks, Block},
};

/// Phase of the session state machine.
///
/// ```text
/// Idle ──start──▶ Running ──last block elapses / end_early──▶ Ended
///                                                               │
///                       Reflected ◀──submit── Reflecting ◀──begin_reflection
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Ended,
    Reflecting,
    Reflected,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Ended => "ended",
            Phase::Reflecting => "reflecting",
            Phase::Reflected => "reflected",
        }
    }

    /// Whether the session has left Running for good.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Ended | Phase::Reflecting | Phase::Reflected)
    }
}

/// Countdown position within a plan.
///
/// Values are plain data; every transition returns a new state and never
/// touches a clock, so the whole countdown can be exercised by calling
/// [`SessionState::tick`] in a loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub phase: Phase,
    /// 0-based, within the plan's blocks while Running
    pub current_block_index: usize,
    pub seconds_remaining: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::IDLE
    }
}

impl SessionState {
    pub const IDLE: SessionState = SessionState {
        phase: Phase::Idle,
        current_block_index: 0,
        seconds_remaining: 0,
    };

    /// First block of a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PreconditionFailed` when there is no block to run
    /// and `FlowError::MalformedPlan` when a block is zero or too long.
    pub fn start(blocks: &[Block]) -> Result<Self> {
        let first = blocks.first().ok_or_else(|| {
            FlowError::precondition("start session").because("the plan has no blocks")
        })?;
        ensure_runnable_blocks(blocks)?;
        Ok(Self {
            phase: Phase::Running,
            current_block_index: 0,
            seconds_remaining: first.seconds(),
        })
    }

    /// One second of countdown.
    ///
    /// When the current block reaches zero the next block becomes current with
    /// its full duration; after the last block the session is Ended with index
    /// and seconds frozen. Outside Running the state is returned unchanged.
    #[must_use]
    pub fn tick(self, blocks: &[Block]) -> Self {
        if self.phase != Phase::Running {
            return self;
        }

        let seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if seconds_remaining > 0 {
            return Self {
                seconds_remaining,
                ..self
            };
        }

        let next = self.current_block_index + 1;
        match blocks.get(next) {
            Some(block) => Self {
                phase: Phase::Running,
                current_block_index: next,
                seconds_remaining: block.seconds(),
            },
            None => Self {
                phase: Phase::Ended,
                current_block_index: self.current_block_index,
                seconds_remaining: 0,
            },
        }
    }

    /// Stops the countdown where it is. Only Running sessions are affected.
    #[must_use]
    pub fn end(self) -> Self {
        if self.phase != Phase::Running {
            return self;
        }
        Self {
            phase: Phase::Ended,
            ..self
        }
    }

    /// Number of blocks that are fully behind the user.
    ///
    /// The current block only counts once it has completely elapsed, which
    /// can only be observed after the session left Running.
    pub fn completed_blocks(&self) -> usize {
        match self.phase {
            Phase::Idle => 0,
            Phase::Running => self.current_block_index,
            Phase::Ended | Phase::Reflecting | Phase::Reflected => {
                self.current_block_index + usize::from(self.seconds_remaining == 0)
            }
        }
    }

    pub(crate) fn with_phase(self, phase: Phase) -> Self {
        Self { phase, ..self }
    }
}
