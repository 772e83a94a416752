//! Weekly summary for the Planner.

use super::Planner;
use crate::{error::Result, models::WeeklySummary, params::SummarizeWeek, summary::summarize};

impl Planner {
    /// Summarizes the most recent plans and their reflections.
    pub async fn weekly_summary(&self, params: &SummarizeWeek) -> Result<WeeklySummary> {
        let limit = params.limit;
        self.with_database(move |db| {
            let plans = db.list_recent_plans(limit)?;
            let ids: Vec<String> = plans.iter().map(|p| p.id.clone()).collect();
            let reflections = db.list_reflections_for_plans(&ids)?;
            Ok(summarize(&plans, &reflections))
        })
        .await
    }
}
