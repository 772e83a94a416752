//! Reflection storage and queries.

use jiff::Timestamp;
use rusqlite::{params, params_from_iter};

use super::{
    ids::next_id,
    plan_queries::{parse_label, parse_timestamp, CHECK_PLAN_EXISTS_SQL},
};
use crate::{
    error::{DatabaseResultExt, FlowError, Result},
    models::{Mood, Reflection},
};

const INSERT_REFLECTION_SQL: &str =
    "INSERT INTO reflections (id, plan_id, mood, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const REFLECTION_COLUMNS: &str = "id, plan_id, mood, notes, created_at";

impl super::Database {
    /// Stores a reflection for an existing plan and returns the canonical
    /// record.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::PlanNotFound` if the plan does not exist.
    pub fn insert_reflection(
        &mut self,
        plan_id: &str,
        mood: Mood,
        notes: &str,
    ) -> Result<Reflection> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id], |row| row.get(0))
            .db_context("Failed to check plan existence")?;
        if !exists {
            return Err(FlowError::PlanNotFound {
                id: plan_id.to_string(),
            });
        }

        let reflection = Reflection {
            id: next_id("refl"),
            plan_id: plan_id.to_string(),
            mood,
            notes: notes.to_string(),
            created_at: Timestamp::now(),
        };

        tx.execute(
            INSERT_REFLECTION_SQL,
            params![
                reflection.id,
                reflection.plan_id,
                reflection.mood.as_str(),
                reflection.notes,
                reflection.created_at.to_string()
            ],
        )
        .db_context("Failed to insert reflection")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(reflection)
    }

    /// Lists the reflections of one plan, oldest first.
    pub fn list_reflections(&self, plan_id: &str) -> Result<Vec<Reflection>> {
        self.list_reflections_for_plans(&[plan_id.to_string()])
    }

    /// Lists the reflections of several plans, oldest first.
    pub fn list_reflections_for_plans(&self, plan_ids: &[String]) -> Result<Vec<Reflection>> {
        if plan_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; plan_ids.len()].join(", ");
        let sql = format!(
            "SELECT {REFLECTION_COLUMNS} FROM reflections WHERE plan_id IN ({placeholders}) ORDER BY rowid ASC"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params_from_iter(plan_ids.iter()), |row| {
                Ok(Reflection {
                    id: row.get(0)?,
                    plan_id: row.get(1)?,
                    mood: parse_label::<Mood>(row, 2)?,
                    notes: row.get(3)?,
                    created_at: parse_timestamp(row, 4)?,
                })
            })
            .db_context("Failed to query reflections")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read reflections")
    }
}
