//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{PlanSummary, Reflection};

/// Past plans, newest first.
///
/// ```rust
/// use focusflow_core::{
///     display::History,
///     models::{Intensity, Mode, PlanSummary},
/// };
/// use jiff::Timestamp;
///
/// let history = History(vec![PlanSummary {
///     id: "plan-1".to_string(),
///     task: "Thesis chapter".to_string(),
///     created_at: Timestamp::UNIX_EPOCH,
///     total_minutes: 90,
///     mode: Mode::Study,
///     intensity: Intensity::Normal,
/// }]);
/// assert!(history.to_string().contains("**Thesis chapter** (90 min, Study, Normal)"));
/// ```
pub struct History(pub Vec<PlanSummary>);

impl History {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No past plans yet.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

/// Reflections recorded for one plan.
pub struct Reflections(pub Vec<Reflection>);

impl Reflections {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Reflections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No reflections yet.")
        } else {
            for reflection in &self.0 {
                write!(f, "{reflection}")?;
            }
            Ok(())
        }
    }
}
