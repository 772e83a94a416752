//! Session execution engine.

use std::sync::Arc;

use log::{debug, info};

use super::{
    state::{Phase, SessionState},
    view::SessionView,
};
use crate::{
    error::{FlowError, Result},
    models::{Block, Plan},
};

/// Identity of one started session.
///
/// Every start, early end and reset issues a new epoch, so a tick carrying an
/// older token can never mutate a newer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

/// What a delivered tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second elapsed inside the current block
    Counted,
    /// The previous block elapsed and `to` became current
    Advanced { from: usize, to: usize },
    /// The last block elapsed and the session ended
    Completed,
    /// The tick belonged to another session or the session is not running
    Ignored,
}

/// Drives one plan block by block under a countdown.
///
/// The engine holds its own handle to the plan it runs, so the countdown
/// keeps a consistent view of the blocks for the whole session.
#[derive(Debug, Default)]
pub struct SessionEngine {
    plan: Option<Arc<Plan>>,
    state: SessionState,
    epoch: u64,
}

impl SessionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Token of the running session, if any.
    pub fn token(&self) -> Option<SessionToken> {
        (self.state.phase == Phase::Running).then_some(SessionToken(self.epoch))
    }

    /// Plan of the current (or last) session.
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_deref()
    }

    pub fn current_block(&self) -> Option<&Block> {
        self.plan()?.blocks.get(self.state.current_block_index)
    }

    /// Read-only view for display, present once a session was started.
    pub fn view(&self) -> Option<SessionView<'_>> {
        let plan = self.plan()?;
        (self.state.phase != Phase::Idle).then(|| SessionView::new(plan, self.state))
    }

    /// Starts a session on `plan` at its first block.
    ///
    /// Calling this while a session is Running is a no-op that returns the
    /// running session's token; the clock is not reset. From Ended,
    /// Reflecting or Reflected a fresh session begins.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PreconditionFailed` if no plan is given or the plan
    /// has no blocks, and `FlowError::MalformedPlan` if a block cannot run.
    pub fn start(&mut self, plan: Option<Arc<Plan>>) -> Result<SessionToken> {
        if self.state.phase == Phase::Running {
            debug!("start ignored: session {} already running", self.epoch);
            return Ok(SessionToken(self.epoch));
        }

        let plan = plan.ok_or_else(|| {
            FlowError::precondition("start session").because("no plan is loaded")
        })?;
        let state = SessionState::start(&plan.blocks)?;

        self.epoch += 1;
        info!(
            "Session {} started on plan {} ({} blocks)",
            self.epoch,
            plan.id,
            plan.blocks.len()
        );
        self.state = state;
        self.plan = Some(plan);
        Ok(SessionToken(self.epoch))
    }

    /// Applies one tick of the session identified by `token`.
    pub fn tick(&mut self, token: SessionToken) -> TickOutcome {
        if token.0 != self.epoch || self.state.phase != Phase::Running {
            debug!(
                "Ignoring tick for session {} (current {}, {})",
                token.0,
                self.epoch,
                self.state.phase.as_str()
            );
            return TickOutcome::Ignored;
        }
        let Some(plan) = self.plan.as_deref() else {
            return TickOutcome::Ignored;
        };

        let before = self.state;
        let after = before.tick(&plan.blocks);
        self.state = after;

        if after.phase == Phase::Ended {
            info!("Session {} completed all {} blocks", self.epoch, plan.blocks.len());
            TickOutcome::Completed
        } else if after.current_block_index != before.current_block_index {
            debug!(
                "Session {} advanced to block {}",
                self.epoch, after.current_block_index
            );
            TickOutcome::Advanced {
                from: before.current_block_index,
                to: after.current_block_index,
            }
        } else {
            TickOutcome::Counted
        }
    }

    /// Ends a running session immediately, freezing index and time.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PreconditionFailed` if no session is running.
    pub fn end_early(&mut self) -> Result<()> {
        if self.state.phase != Phase::Running {
            return Err(FlowError::precondition("end session")
                .because(format!("the session is {}", self.state.phase.as_str())));
        }
        self.state = self.state.end();
        self.epoch += 1;
        info!(
            "Session ended early at block {} with {}s left",
            self.state.current_block_index, self.state.seconds_remaining
        );
        Ok(())
    }

    /// Moves an ended session into reflection.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PreconditionFailed` unless the session is Ended; the
    /// state is left unchanged.
    pub fn begin_reflection(&mut self) -> Result<()> {
        self.transition(Phase::Ended, Phase::Reflecting, "begin reflection")
    }

    /// Records that the reflection was accepted by persistence.
    pub(crate) fn mark_reflected(&mut self) -> Result<()> {
        self.transition(Phase::Reflecting, Phase::Reflected, "complete reflection")
    }

    /// Hard reset to Idle, forgetting the plan and invalidating any ticks.
    pub fn reset(&mut self) {
        if self.state.phase != Phase::Idle {
            debug!("Resetting session {} from {}", self.epoch, self.state.phase.as_str());
        }
        self.plan = None;
        self.state = SessionState::IDLE;
        self.epoch += 1;
    }

    fn transition(&mut self, from: Phase, to: Phase, operation: &str) -> Result<()> {
        if self.state.phase != from {
            return Err(FlowError::precondition(operation).because(format!(
                "the session is {}, not {}",
                self.state.phase.as_str(),
                from.as_str()
            )));
        }
        self.state = self.state.with_phase(to);
        Ok(())
    }
}
