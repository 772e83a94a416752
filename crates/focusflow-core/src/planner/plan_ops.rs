//! Plan operations for the Planner.

use jiff::Timestamp;
use log::info;

use super::Planner;
use crate::{
    db::ids::next_id,
    error::{FlowError, Result},
    generator::{draft_plan, fit_to_total, validate_request, validate_total, MAX_PLAN_MINUTES},
    models::{plan::ensure_block_lengths, Plan, PlanDraft, PlanSummary},
    params::{GeneratePlan, Id, ListHistory},
};

impl Planner {
    /// Generates a plan for the request and stores it.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidInput` for a blank task or a zero budget,
    /// or a database error if the plan cannot be stored.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<Plan> {
        validate_request(params)?;
        let draft = draft_plan(params);
        self.store_draft(draft).await
    }

    /// Stores a plan produced outside this crate, e.g. by another generator.
    ///
    /// Block durations are fitted to the budget the same way generated plans
    /// are. A zero budget is replaced by the sum of the block durations.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::MalformedPlan` for a draft without blocks, with a
    /// block longer than a day or with blocks adding up to more than
    /// `MAX_PLAN_MINUTES`, and `FlowError::InvalidInput` for a blank task or a
    /// budget above `MAX_PLAN_MINUTES`.
    pub async fn import_plan(&self, mut draft: PlanDraft) -> Result<Plan> {
        if draft.blocks.is_empty() {
            return Err(FlowError::malformed_plan("plan has no blocks"));
        }
        if draft.task.trim().is_empty() {
            return Err(FlowError::invalid_input("task").with_reason("Task cannot be empty"));
        }
        ensure_block_lengths(&draft.blocks)?;
        draft.task = draft.task.trim().to_string();
        if draft.total_minutes == 0 {
            let sum = draft.blocks.iter().map(|b| u64::from(b.minutes.max(1))).sum::<u64>();
            draft.total_minutes = u32::try_from(sum)
                .ok()
                .filter(|total| *total <= MAX_PLAN_MINUTES)
                .ok_or_else(|| {
                    FlowError::malformed_plan(format!(
                        "blocks add up to {sum} minutes, more than {MAX_PLAN_MINUTES}"
                    ))
                })?;
        }
        validate_total(draft.total_minutes)?;
        fit_to_total(&mut draft.blocks, draft.total_minutes);
        self.store_draft(draft).await
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let plan_id = params.id.clone();
        self.with_database(move |db| db.get_plan(&plan_id)).await
    }

    /// Lists past plans, newest first.
    pub async fn list_history(&self, params: &ListHistory) -> Result<Vec<PlanSummary>> {
        let limit = params.limit;
        self.with_database(move |db| db.list_plan_summaries(limit)).await
    }

    async fn store_draft(&self, draft: PlanDraft) -> Result<Plan> {
        let plan = draft.into_plan(next_id("plan"), Timestamp::now());
        plan.ensure_runnable()?;

        let stored = plan.clone();
        self.with_database(move |db| db.insert_plan(&stored)).await?;
        info!(
            "Stored plan {} for '{}' ({} blocks, {} min)",
            plan.id,
            plan.task,
            plan.blocks.len(),
            plan.block_minutes()
        );
        Ok(plan)
    }
}
