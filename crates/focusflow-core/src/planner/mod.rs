//! High-level planner API backed by SQLite.
//!
//! [`Planner`] is the local implementation of the collaborator contracts:
//! it generates and imports plans, looks them up, lists history, stores
//! reflections and computes the weekly summary. All database work runs on
//! the blocking thread pool so the async callers (the session runner and the
//! MCP server) never stall on disk I/O.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Planner      │    │  spawn_blocking │    │    Database     │
//! │ (plan_ops, ...) │───▶│   (tokio pool)  │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Generation, import, lookup and history
//! - [`reflection_ops`]: Reflection submission and listing
//! - [`summary_ops`]: Weekly summary
//!
//! # Usage
//!
//! ```rust,no_run
//! use focusflow_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path("/tmp/focusflow.db")
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .generate_plan(&GeneratePlan {
//!         task: "Operating systems revision".to_string(),
//!         total_minutes: 90,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{FlowError, Result},
};

pub mod builder;
pub mod plan_ops;
pub mod reflection_ops;
pub mod summary_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for plans, reflections and summaries.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| FlowError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
