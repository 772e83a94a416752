//! Interactive focus session: countdown, early end on Ctrl+C, reflection.

use std::{str::FromStr, time::Duration};

use anyhow::{Context, Result};
use focusflow_core::{
    display::{OperationStatus, StatusLine},
    Coordinator, Id, Mood, Planner, SessionEnd, SessionView, TickDriver, TickOutcome,
};
use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::renderer::TerminalRenderer;

/// What to run and how to close the session.
pub struct RunOptions {
    pub plan_id: String,
    /// Length of one countdown second
    pub tick: Duration,
    pub mood: Option<Mood>,
    pub notes: Option<String>,
    pub reflect: bool,
}

/// Runs a stored plan from its first block until it completes or the user
/// presses Ctrl+C, then captures a reflection.
pub async fn run_session(
    planner: Planner,
    renderer: &TerminalRenderer,
    options: RunOptions,
) -> Result<()> {
    let mut coordinator = Coordinator::new(planner);
    let plan = coordinator
        .load_plan_by_id(&Id {
            id: options.plan_id.clone(),
        })
        .await
        .context("Failed to load plan")?;
    renderer.render(&plan.to_string())?;

    coordinator.start().context("Failed to start session")?;
    if let Some(view) = coordinator.view() {
        renderer.render(&format!("\n{view}"))?;
    }

    let mut driver = TickDriver::new(options.tick);
    let end = coordinator
        .run_until_ended(&mut driver, interrupted(), |view, outcome| {
            if let Err(e) = show_tick(renderer, view, outcome) {
                debug!("Failed to draw session status: {e}");
            }
        })
        .await
        .context("Session failed")?;
    renderer.finish_line()?;

    match end {
        SessionEnd::Completed => info!("Session on plan {} completed", plan.id),
        SessionEnd::Interrupted => info!("Session on plan {} ended early", plan.id),
    }
    if let Some(view) = coordinator.view() {
        renderer.render(&format!("\n{view}"))?;
    }

    if !options.reflect {
        return Ok(());
    }
    reflect(&mut coordinator, renderer, options.mood, options.notes).await
}

/// Resolves on Ctrl+C; never resolves if the signal cannot be watched.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}

fn show_tick(
    renderer: &TerminalRenderer,
    view: &SessionView<'_>,
    outcome: TickOutcome,
) -> Result<()> {
    match outcome {
        TickOutcome::Advanced { .. } => {
            renderer.finish_line()?;
            renderer.render(&format!("\n{view}"))?;
        }
        // Plain output gets one line per minute
        TickOutcome::Counted if !renderer.is_rich() && view.countdown().seconds() != 0 => {
            return Ok(());
        }
        _ => {}
    }
    renderer.status_line(&StatusLine(view).to_string())
}

async fn reflect(
    coordinator: &mut Coordinator<Planner>,
    renderer: &TerminalRenderer,
    mood: Option<Mood>,
    notes: Option<String>,
) -> Result<()> {
    coordinator
        .begin_reflection()
        .context("Failed to begin reflection")?;

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let (mood, notes) = match mood {
        Some(mood) => (mood, notes.unwrap_or_default()),
        None => {
            let Some(mood) = ask_mood(renderer, &mut input).await? else {
                let status = OperationStatus::skipped("No mood given, reflection not saved.");
                renderer.render(&format!("\n{status}"))?;
                return Ok(());
            };
            let notes = match notes {
                Some(notes) => notes,
                None => ask(renderer, &mut input, "Notes (optional): ")
                    .await?
                    .unwrap_or_default(),
            };
            (mood, notes)
        }
    };

    let reflection = coordinator
        .submit_reflection(Some(mood), &notes)
        .await
        .context("Failed to save reflection")?;

    let status = OperationStatus::success("Reflection saved.");
    renderer.render(&format!("\n{status}\n{reflection}"))
}

async fn ask_mood(
    renderer: &TerminalRenderer,
    input: &mut Lines<BufReader<Stdin>>,
) -> Result<Option<Mood>> {
    loop {
        let question = "How did it go? [great/ok/tired] (Enter to skip): ";
        let Some(answer) = ask(renderer, input, question).await? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(None);
        }
        match Mood::from_str(&answer) {
            Ok(mood) => return Ok(Some(mood)),
            Err(_) => renderer.render("Please answer great, ok or tired.\n")?,
        }
    }
}

/// Reads one trimmed line; `None` at end of input.
async fn ask(
    renderer: &TerminalRenderer,
    input: &mut Lines<BufReader<Stdin>>,
    question: &str,
) -> Result<Option<String>> {
    renderer.prompt(question)?;
    let line = input.next_line().await.context("Failed to read input")?;
    Ok(line.map(|l| l.trim().to_string()))
}
