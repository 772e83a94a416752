//! Core library for FocusFlow, a focus-session planner.
//!
//! A plan is an ordered list of timed blocks. This crate loads one plan at a
//! time, runs it as a countdown session that advances block by block, and
//! captures a reflection once the session ends. Plans, history, reflections
//! and weekly summaries are provided by [`Collaborators`]; [`Planner`] is
//! the local implementation backed by SQLite.
//!
//! # Components
//!
//! - [`store`]: [`PlanStore`], the single active plan
//! - [`session`]: the countdown state machine, reflection capture and the
//!   1 Hz [`TickDriver`](session::TickDriver)
//! - [`coordinator`]: [`Coordinator`], composing the stores with explicit
//!   reset rules
//! - [`planner`], [`generator`], [`summary`], [`db`]: local collaborators
//! - [`display`]: markdown rendering for every model and the live session
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use focusflow_core::{params::GeneratePlan, Coordinator, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path("focusflow.db")
//!     .build()
//!     .await?;
//!
//! let mut coordinator = Coordinator::new(planner);
//! coordinator
//!     .generate_plan(&GeneratePlan {
//!         task: "Probability problem set".to_string(),
//!         total_minutes: 45,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let token = coordinator.start()?;
//! coordinator.tick(token);
//! if let Some(view) = coordinator.view() {
//!     println!("{view}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod collaborators;
pub mod coordinator;
pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;
pub mod session;
pub mod store;
pub mod summary;

// Re-export commonly used types
pub use collaborators::Collaborators;
pub use coordinator::{Coordinator, SessionEnd};
pub use db::Database;
pub use display::{History, LocalDateTime, OperationStatus, Reflections};
pub use error::{FlowError, Result};
pub use models::{
    Block, Intensity, Mode, Mood, Plan, PlanDraft, PlanSummary, Reflection, WeeklySummary,
};
pub use params::{GeneratePlan, Id, ListHistory, SubmitReflection, SummarizeWeek};
pub use planner::{Planner, PlannerBuilder};
pub use session::{Phase, SessionEngine, SessionToken, SessionView, TickDriver, TickOutcome};
pub use store::PlanStore;
