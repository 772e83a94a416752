//! Contracts of the services a session depends on.

use crate::{
    error::{FlowError, Result},
    models::{Plan, PlanSummary, Reflection, WeeklySummary},
    params::{GeneratePlan, Id, ListHistory, SubmitReflection, SummarizeWeek},
    planner::Planner,
};

/// Plan generation, lookup, history, reflection persistence and summaries.
///
/// [`Planner`] implements these against the local SQLite database; tests and
/// other front ends can substitute their own.
#[allow(async_fn_in_trait)]
pub trait Collaborators {
    /// Produces a new plan for the request.
    async fn generate_plan(&self, params: &GeneratePlan) -> Result<Plan>;

    /// Looks up a stored plan.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PlanNotFound` for an unknown ID.
    async fn plan_by_id(&self, params: &Id) -> Result<Plan>;

    /// Past plans, newest first.
    async fn history(&self, params: &ListHistory) -> Result<Vec<PlanSummary>>;

    /// Persists a reflection and returns the canonical record.
    async fn submit_reflection(&self, params: &SubmitReflection) -> Result<Reflection>;

    async fn weekly_summary(&self, params: &SummarizeWeek) -> Result<WeeklySummary>;
}

impl Collaborators for Planner {
    async fn generate_plan(&self, params: &GeneratePlan) -> Result<Plan> {
        Planner::generate_plan(self, params).await
    }

    async fn plan_by_id(&self, params: &Id) -> Result<Plan> {
        self.get_plan(params)
            .await?
            .ok_or_else(|| FlowError::PlanNotFound {
                id: params.id.clone(),
            })
    }

    async fn history(&self, params: &ListHistory) -> Result<Vec<PlanSummary>> {
        self.list_history(params).await
    }

    async fn submit_reflection(&self, params: &SubmitReflection) -> Result<Reflection> {
        Planner::submit_reflection(self, params).await
    }

    async fn weekly_summary(&self, params: &SummarizeWeek) -> Result<WeeklySummary> {
        Planner::weekly_summary(self, params).await
    }
}
