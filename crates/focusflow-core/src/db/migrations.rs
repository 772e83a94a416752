//! Database schema initialization and migrations.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

/// Columns added to `plans` after the first schema version.
const PLAN_COLUMN_MIGRATIONS: &[(&str, &str)] = &[
    (
        "mode",
        "ALTER TABLE plans ADD COLUMN mode TEXT NOT NULL DEFAULT 'study'",
    ),
    (
        "intensity",
        "ALTER TABLE plans ADD COLUMN intensity TEXT NOT NULL DEFAULT 'normal'",
    ),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        for (column, sql) in PLAN_COLUMN_MIGRATIONS {
            if !self.has_column("plans", column)? {
                debug!("Migrating plans table: adding column {column}");
                self.connection
                    .execute(sql, [])
                    .db_context("Failed to add column to plans table")?;
            }
        }
        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
