//! Plan storage and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Intensity, Mode, Plan, PlanSummary},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (id, created_at, task, total_minutes, mode, intensity, data) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_PLAN_SQL: &str = "SELECT data FROM plans WHERE id = ?1";
pub(super) const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
// rowid preserves insertion order even when timestamps tie
const LIST_PLAN_SUMMARIES_SQL: &str = "SELECT id, task, created_at, total_minutes, mode, intensity FROM plans ORDER BY rowid DESC LIMIT ?1";
const LIST_RECENT_PLANS_SQL: &str = "SELECT data FROM plans ORDER BY rowid DESC LIMIT ?1";

impl super::Database {
    /// Stores a complete plan.
    ///
    /// The indexed columns are kept alongside the JSON document so history
    /// listings never have to decode block lists.
    pub fn insert_plan(&mut self, plan: &Plan) -> Result<()> {
        let data = serde_json::to_string(plan)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                plan.id,
                plan.created_at.to_string(),
                plan.task,
                plan.total_minutes,
                plan.mode.as_str(),
                plan.intensity.as_str(),
                data
            ],
        )
        .db_context("Failed to insert plan")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: &str) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id], |row| plan_from_data(row, 0))
            .optional()
            .db_context("Failed to query plan")
    }

    /// Whether a plan with the given ID exists.
    pub fn plan_exists(&self, id: &str) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id], |row| row.get(0))
            .db_context("Failed to check plan existence")
    }

    /// Lists plan summaries, newest first.
    pub fn list_plan_summaries(&self, limit: u32) -> Result<Vec<PlanSummary>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PLAN_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(PlanSummary {
                    id: row.get(0)?,
                    task: row.get(1)?,
                    created_at: parse_timestamp(row, 2)?,
                    total_minutes: row.get(3)?,
                    mode: parse_label::<Mode>(row, 4)?,
                    intensity: parse_label::<Intensity>(row, 5)?,
                })
            })
            .db_context("Failed to query plan history")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read plan history")
    }

    /// Loads the most recent complete plans, newest first.
    pub fn list_recent_plans(&self, limit: u32) -> Result<Vec<Plan>> {
        let mut stmt = self
            .connection
            .prepare(LIST_RECENT_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![limit], |row| plan_from_data(row, 0))
            .db_context("Failed to query recent plans")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read recent plans")
    }
}

fn plan_from_data(row: &Row<'_>, idx: usize) -> rusqlite::Result<Plan> {
    let data: String = row.get(idx)?;
    serde_json::from_str(&data)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(super) fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(super) fn parse_label<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    let value: String = row.get(idx)?;
    value.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        )
    })
}
