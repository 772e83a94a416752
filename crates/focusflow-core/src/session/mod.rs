//! Session execution: countdown state machine, reflection capture and the
//! timer that drives them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐  token  ┌─────────────────┐  tick(state)  ┌─────────────────┐
//! │   TickDriver    │────────▶│  SessionEngine  │──────────────▶│  SessionState   │
//! │ (tokio interval)│         │ (epoch, plan)   │               │  (pure value)   │
//! └─────────────────┘         └─────────────────┘               └─────────────────┘
//! ```
//!
//! - [`state`]: the tagged [`SessionState`] and its pure transitions
//! - [`engine`]: [`SessionEngine`], owner of the state for one plan, issuing a
//!   [`SessionToken`] per session so stale ticks are rejected
//! - [`driver`]: [`TickDriver`], the 1 Hz timer task
//! - [`reflection`]: [`ReflectionCapture`], the draft and its submitted record
//! - [`progress`] and [`view`]: derived values for display
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use focusflow_core::{
//!     models::{Block, Intensity, Mode, Plan},
//!     session::{Phase, SessionEngine, TickOutcome},
//! };
//! use jiff::Timestamp;
//!
//! let plan = Arc::new(Plan {
//!     id: "plan-1".to_string(),
//!     task: "Inbox".to_string(),
//!     total_minutes: 2,
//!     created_at: Timestamp::UNIX_EPOCH,
//!     mode: Mode::Admin,
//!     intensity: Intensity::Normal,
//!     focus_tip: String::new(),
//!     energy_level: String::new(),
//!     blocks: vec![Block::new("Triage", 1, "", "easy"), Block::new("Reply", 1, "", "easy")],
//! });
//!
//! let mut engine = SessionEngine::new();
//! let token = engine.start(Some(plan))?;
//! for _ in 0..59 {
//!     assert_eq!(engine.tick(token), TickOutcome::Counted);
//! }
//! assert_eq!(engine.tick(token), TickOutcome::Advanced { from: 0, to: 1 });
//! assert_eq!(engine.state().seconds_remaining, 60);
//! # Ok::<(), focusflow_core::FlowError>(())
//! ```

pub mod driver;
pub mod engine;
pub mod progress;
pub mod reflection;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;

pub use driver::{TickDriver, TICK_PERIOD};
pub use engine::{SessionEngine, SessionToken, TickOutcome};
pub use progress::{progress_percent, Countdown};
pub use reflection::{ReflectionCapture, ReflectionDraft};
pub use state::{Phase, SessionState};
pub use view::SessionView;
