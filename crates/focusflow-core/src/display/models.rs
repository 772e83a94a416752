//! Display implementations for domain models.
//!
//! Markdown output: plans render as a document with a block list, history
//! entries and reflections as list items.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Block, Intensity, Mode, Mood, Plan, PlanSummary, Reflection, WeeklySummary};

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.task)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Mode: {}", self.mode)?;
        writeln!(f, "- Intensity: {}", self.intensity)?;
        writeln!(f, "- Budget: {} min", self.total_minutes)?;
        if !self.energy_level.is_empty() {
            writeln!(f, "- Energy: {}", self.energy_level)?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.focus_tip.is_empty() {
            writeln!(f)?;
            writeln!(f, "> {}", self.focus_tip)?;
        }

        if self.blocks.is_empty() {
            writeln!(f, "\nNo blocks in this plan.")?;
        } else {
            writeln!(f, "\n## Blocks")?;
            writeln!(f)?;
            for (i, block) in self.blocks.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, block)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** ({} min", self.title, self.minutes)?;
        if !self.difficulty.is_empty() {
            write!(f, ", {}", self.difficulty)?;
        }
        write!(f, ")")?;
        if !self.details.is_empty() {
            write!(f, ": {}", self.details)?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({} min, {}, {}) `{}` created {}",
            self.task,
            self.total_minutes,
            self.mode,
            self.intensity,
            self.id,
            LocalDateTime(&self.created_at)
        )
    }
}

impl fmt::Display for Reflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- Felt **{}** on {}",
            self.mood,
            LocalDateTime(&self.created_at)
        )?;
        if !self.notes.is_empty() {
            write!(f, ": {}", self.notes)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for WeeklySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Weekly summary")?;
        writeln!(f)?;
        writeln!(f, "- Sessions: {}", self.total_sessions)?;
        writeln!(f, "- Minutes planned: {}", self.total_minutes)?;

        if !self.top_tasks.is_empty() {
            writeln!(f, "\n## Top tasks")?;
            writeln!(f)?;
            for (i, task) in self.top_tasks.iter().enumerate() {
                writeln!(f, "{}. {task}", i + 1)?;
            }
        }

        for (title, items) in [("Themes", &self.themes), ("Suggestions", &self.suggestions)] {
            if items.is_empty() {
                continue;
            }
            writeln!(f, "\n## {title}")?;
            writeln!(f)?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
        }

        Ok(())
    }
}
