//! Display formatting for plans, history, reflections and live sessions.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! collections are wrapped in newtypes, and the running session is rendered
//! from a [`SessionView`](crate::session::SessionView). All output is
//! markdown so the CLI can render it through its terminal skin or print it
//! as-is, and the MCP server can return it verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Newtypes &      │    │   Formatted     │
//! │ (Plan, Session) │───▶│ Status wrappers │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types ([`History`], [`Reflections`])
//! - [`session`]: Session rendering ([`ProgressBar`], [`StatusLine`])
//! - [`status`]: Status and confirmation messages ([`OperationStatus`])
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use focusflow_core::display::{History, OperationStatus};
//!
//! let history = History(vec![]);
//! assert_eq!(history.to_string(), "No past plans yet.\n");
//!
//! let saved = OperationStatus::success("Reflection saved".to_string());
//! assert!(saved.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod session;
pub mod status;

pub use collections::{History, Reflections};
pub use datetime::LocalDateTime;
pub use session::{ProgressBar, StatusLine};
pub use status::OperationStatus;
