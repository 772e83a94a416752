//! Data models for plans, blocks and reflections.
//!
//! These are the core domain models of FocusFlow. Display implementations are
//! located in [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! # Wire Shape
//!
//! Models serialize to the JSON shape used by the collaborator contracts:
//! a [`Plan`] carries its blocks under the `plan` key, and all label enums
//! ([`Mode`], [`Intensity`], [`Mood`]) serialize as lowercase strings.
//!
//! ```rust
//! use focusflow_core::models::{Block, Intensity, Mode, Plan};
//! use jiff::Timestamp;
//!
//! let plan = Plan {
//!     id: "plan-1".to_string(),
//!     task: "Heaps and hashing".to_string(),
//!     total_minutes: 30,
//!     created_at: Timestamp::UNIX_EPOCH,
//!     mode: Mode::Study,
//!     intensity: Intensity::Normal,
//!     focus_tip: String::new(),
//!     energy_level: "medium".to_string(),
//!     blocks: vec![
//!         Block::new("Read", 25, "Chapter 6", "medium"),
//!         Block::new("Recap", 5, "", "easy"),
//!     ],
//! };
//! assert!(plan.ensure_runnable().is_ok());
//! assert_eq!(plan.block_minutes(), 30);
//! ```

pub mod block;
pub mod kinds;
pub mod plan;
pub mod reflection;
pub mod summary;
pub mod weekly;

#[cfg(test)]
mod tests;

pub use block::{Block, MAX_BLOCK_MINUTES};
pub use kinds::{Intensity, Mode, Mood};
pub use plan::{Plan, PlanDraft};
pub use reflection::Reflection;
pub use summary::PlanSummary;
pub use weekly::WeeklySummary;
