//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{FlowError, Result},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/focusflow/focusflow.db` or
    /// `~/.local/share/focusflow/focusflow.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `FlowError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FlowError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), FlowError>(())
        })
        .await
        .map_err(|e| FlowError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        debug!("Planner ready at {}", db_path.display());
        Ok(Planner::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("focusflow")
            .place_data_file("focusflow.db")
            .map_err(|e| FlowError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
