//! Composition of plan store, session engine and reflection capture.
//!
//! The [`Coordinator`] is the only place that knows how the three stores
//! relate:
//!
//! - loading a plan (generated, looked up or given) resets the session to
//!   Idle and drops any reflection
//! - starting a fresh session drops the previous session's reflection
//! - a reflection can be submitted only once the session was moved into
//!   reflection, and the session becomes Reflected only after persistence
//!   accepted it
//!
//! Every collaborator failure is reported as
//! [`FlowError::Collaborator`](crate::FlowError::Collaborator) (or
//! `MalformedPlan` for an unusable plan) and leaves all three stores as they
//! were.

use std::{future::Future, sync::Arc};

use log::{debug, warn};

use crate::{
    collaborators::Collaborators,
    error::{FlowError, Result},
    models::{Mood, Plan, PlanSummary, Reflection, WeeklySummary},
    params::{GeneratePlan, Id, ListHistory, SummarizeWeek},
    session::{
        Phase, ReflectionCapture, SessionEngine, SessionToken, SessionView, TickDriver,
        TickOutcome,
    },
    store::PlanStore,
};

/// How a driven session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The last block elapsed
    Completed,
    /// The shutdown signal ended it early
    Interrupted,
}

/// Owns the session-side state of one user.
#[derive(Debug)]
pub struct Coordinator<C> {
    collaborators: C,
    store: PlanStore,
    engine: SessionEngine,
    reflection: ReflectionCapture,
}

impl<C: Collaborators> Coordinator<C> {
    pub fn new(collaborators: C) -> Self {
        Self {
            collaborators,
            store: PlanStore::new(),
            engine: SessionEngine::new(),
            reflection: ReflectionCapture::new(),
        }
    }

    pub fn collaborators(&self) -> &C {
        &self.collaborators
    }

    /// The loaded plan.
    pub fn plan(&self) -> Option<&Plan> {
        self.store.current_plan()
    }

    pub fn engine(&self) -> &SessionEngine {
        &self.engine
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn view(&self) -> Option<SessionView<'_>> {
        self.engine.view()
    }

    pub fn reflection(&self) -> &ReflectionCapture {
        &self.reflection
    }

    /// Loads `plan`, resetting the session from any phase.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::MalformedPlan` for a plan without runnable blocks;
    /// nothing changes in that case.
    pub fn load_plan(&mut self, plan: Plan) -> Result<Arc<Plan>> {
        let plan = self.store.load_plan(plan)?;
        self.engine.reset();
        self.reflection.clear();
        Ok(plan)
    }

    /// Requests a new plan and loads it.
    pub async fn generate_plan(&mut self, params: &GeneratePlan) -> Result<Arc<Plan>> {
        let plan = self
            .collaborators
            .generate_plan(params)
            .await
            .map_err(|e| failed("generate plan", e))?;
        self.load_plan(plan)
    }

    /// Looks up a stored plan and loads it.
    pub async fn load_plan_by_id(&mut self, params: &Id) -> Result<Arc<Plan>> {
        let plan = self
            .collaborators
            .plan_by_id(params)
            .await
            .map_err(|e| failed("load plan", e))?;
        self.load_plan(plan)
    }

    pub async fn history(&self, params: &ListHistory) -> Result<Vec<PlanSummary>> {
        self.collaborators
            .history(params)
            .await
            .map_err(|e| failed("load history", e))
    }

    pub async fn weekly_summary(&self, params: &SummarizeWeek) -> Result<WeeklySummary> {
        self.collaborators
            .weekly_summary(params)
            .await
            .map_err(|e| failed("load weekly summary", e))
    }

    /// Starts a session on the loaded plan.
    ///
    /// While a session is Running this is a no-op returning its token.
    pub fn start(&mut self) -> Result<SessionToken> {
        let fresh = self.engine.phase() != Phase::Running;
        let token = self.engine.start(self.store.shared())?;
        if fresh {
            self.reflection.clear();
        }
        Ok(token)
    }

    pub fn tick(&mut self, token: SessionToken) -> TickOutcome {
        self.engine.tick(token)
    }

    pub fn end_early(&mut self) -> Result<()> {
        self.engine.end_early()
    }

    /// Moves an ended session into reflection and opens the draft.
    pub fn begin_reflection(&mut self) -> Result<()> {
        self.engine.begin_reflection()?;
        if let Some(plan) = self.engine.plan() {
            self.reflection.open(&plan.id);
        }
        Ok(())
    }

    /// Submits the reflection draft with the given mood and notes.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PreconditionFailed` outside of reflection or without
    /// a mood (no record is produced), and `FlowError::Collaborator` when
    /// persistence fails; the draft is kept for another attempt.
    pub async fn submit_reflection(
        &mut self,
        mood: Option<Mood>,
        notes: &str,
    ) -> Result<Reflection> {
        if self.engine.phase() != Phase::Reflecting {
            return Err(FlowError::precondition("submit reflection")
                .because(format!("the session is {}", self.engine.phase().as_str())));
        }
        let request = self.reflection.prepare(mood, notes)?;

        let record = self
            .collaborators
            .submit_reflection(&request)
            .await
            .map_err(|e| failed("submit reflection", e))?;

        self.reflection.complete(record.clone());
        self.engine.mark_reflected()?;
        Ok(record)
    }

    /// Drops the plan, the session and the reflection.
    pub fn clear(&mut self) {
        self.store.clear();
        self.engine.reset();
        self.reflection.clear();
    }

    /// Drives the running session with `driver` until it completes or
    /// `shutdown` resolves, which ends it early.
    ///
    /// `observer` sees the session after every applied tick.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PreconditionFailed` if no session is running.
    pub async fn run_until_ended<S, O>(
        &mut self,
        driver: &mut TickDriver,
        shutdown: S,
        mut observer: O,
    ) -> Result<SessionEnd>
    where
        S: Future<Output = ()>,
        O: FnMut(&SessionView<'_>, TickOutcome),
    {
        let token = self.engine.token().ok_or_else(|| {
            FlowError::precondition("run session").because("no session is running")
        })?;
        driver.arm(token);
        tokio::pin!(shutdown);

        let result = loop {
            tokio::select! {
                biased;

                () = &mut shutdown => {
                    debug!("Shutdown requested, ending session early");
                    break self.engine.end_early().map(|()| SessionEnd::Interrupted);
                }
                tick = driver.next_tick() => {
                    let Some(tick) = tick else {
                        break Err(FlowError::Configuration {
                            message: "Tick driver stopped".to_string(),
                        });
                    };
                    let outcome = self.engine.tick(tick);
                    if outcome == TickOutcome::Ignored {
                        continue;
                    }
                    if let Some(view) = self.engine.view() {
                        observer(&view, outcome);
                    }
                    if outcome == TickOutcome::Completed {
                        break Ok(SessionEnd::Completed);
                    }
                }
            }
        };

        driver.disarm();
        result
    }
}

fn failed(action: &str, error: FlowError) -> FlowError {
    warn!("Failed to {action}: {error}");
    FlowError::collaborator(action, error)
}
