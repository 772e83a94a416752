//! Rendering of a running or finished session.

use std::fmt;

use crate::session::{Phase, SessionView};

const BAR_WIDTH: usize = 20;

/// Fixed-width bar for a percentage, e.g. `[██████░░░░░░░░░░░░░░]`.
pub struct ProgressBar(pub u8);

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = usize::from(self.0.min(100));
        let filled = percent * BAR_WIDTH / 100;
        write!(
            f,
            "[{}{}]",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        )
    }
}

/// One-line status for redrawing in place while the countdown runs.
pub struct StatusLine<'a, 'p>(pub &'a SessionView<'p>);

impl fmt::Display for StatusLine<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let title = view.block().map_or("", |b| b.title.as_str());
        write!(
            f,
            "Block {}/{} {:<20} {} {} {:>3}%",
            view.block_number(),
            view.block_count(),
            title,
            view.countdown(),
            ProgressBar(view.progress_percent()),
            view.progress_percent()
        )
    }
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = self.progress_percent();
        match self.phase() {
            Phase::Idle => return writeln!(f, "No session started."),
            Phase::Running => {}
            _ if progress == 100 => writeln!(f, "# Session complete\n")?,
            _ => writeln!(f, "# Session ended early\n")?,
        }

        if let Some(block) = self.block() {
            writeln!(
                f,
                "## Block {} of {}: {}",
                self.block_number(),
                self.block_count(),
                block.title
            )?;
            writeln!(f)?;
            if self.phase() == Phase::Running {
                writeln!(f, "**{}** remaining", self.countdown())?;
                writeln!(f)?;
            }
            if !block.details.is_empty() {
                writeln!(f, "{}", block.details)?;
                writeln!(f)?;
            }
        }

        writeln!(f, "`{}` {}% complete", ProgressBar(progress), progress)
    }
}
