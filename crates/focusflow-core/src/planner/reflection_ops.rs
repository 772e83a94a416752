//! Reflection operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    error::Result,
    models::Reflection,
    params::{Id, SubmitReflection},
};

impl Planner {
    /// Stores a reflection on a session of an existing plan.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PlanNotFound` if the plan does not exist.
    pub async fn submit_reflection(&self, params: &SubmitReflection) -> Result<Reflection> {
        let SubmitReflection {
            plan_id,
            mood,
            notes,
        } = params.clone();

        let reflection = self
            .with_database(move |db| db.insert_reflection(&plan_id, mood, notes.trim()))
            .await?;
        info!(
            "Stored reflection {} ({}) for plan {}",
            reflection.id,
            reflection.mood.as_str(),
            reflection.plan_id
        );
        Ok(reflection)
    }

    /// Lists the reflections recorded for a plan, oldest first.
    pub async fn list_reflections(&self, params: &Id) -> Result<Vec<Reflection>> {
        let plan_id = params.id.clone();
        self.with_database(move |db| db.list_reflections(&plan_id)).await
    }
}
