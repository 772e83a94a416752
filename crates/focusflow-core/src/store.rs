//! Holder of the single currently active plan.

use std::sync::Arc;

use log::debug;

use crate::{error::Result, models::Plan};

/// Holds the currently loaded, immutable plan.
///
/// A plan is replaced wholesale and never mutated in place; consumers that
/// need to keep it across a later load (the session engine) share it through
/// an [`Arc`].
#[derive(Debug, Default)]
pub struct PlanStore {
    current: Option<Arc<Plan>>,
}

impl PlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active plan.
    ///
    /// The store is left untouched when the plan is rejected.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::MalformedPlan` if the plan has no blocks or a block
    /// with a zero duration, since such a plan has no runnable first block.
    pub fn load_plan(&mut self, plan: Plan) -> Result<Arc<Plan>> {
        plan.ensure_runnable()?;
        debug!("Loading plan {} with {} blocks", plan.id, plan.blocks.len());
        let plan = Arc::new(plan);
        self.current = Some(Arc::clone(&plan));
        Ok(plan)
    }

    /// The active plan, absent before any load.
    pub fn current_plan(&self) -> Option<&Plan> {
        self.current.as_deref()
    }

    /// Shared handle to the active plan.
    pub fn shared(&self) -> Option<Arc<Plan>> {
        self.current.clone()
    }

    /// Drops the active plan.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
