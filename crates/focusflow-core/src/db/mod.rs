//! Database operations and SQLite management for plans and reflections.
//!
//! This module provides the low-level storage behind the local collaborators.
//! It handles SQLite connections and schema management, and exposes query
//! interfaces for plans ([`plan_queries`]) and reflections
//! ([`reflection_queries`]).

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod ids;
pub mod migrations;
pub mod plan_queries;
pub mod reflection_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
