//! Command-line argument wrappers and command handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From` impls, so the core stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner / Coordinator
//! ```
//!
//! [`Cli`] executes the commands and renders their markdown output.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use focusflow_core::{
    display::{History, OperationStatus, Reflections},
    params::{
        GeneratePlan, Id, ListHistory, SummarizeWeek, DEFAULT_HISTORY_LIMIT,
        DEFAULT_SUMMARY_LIMIT,
    },
    Intensity, Mode, Mood, PlanDraft, Planner,
};
use log::debug;

use crate::{
    renderer::TerminalRenderer,
    session::{run_session, RunOptions},
};

/// Kind of work
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Reading, notes, practice questions
    Study,
    /// Specs, implementation, debugging
    Coding,
    /// Email, forms, small tasks
    Admin,
}

impl From<ModeArg> for Mode {
    fn from(val: ModeArg) -> Self {
        match val {
            ModeArg::Study => Mode::Study,
            ModeArg::Coding => Mode::Coding,
            ModeArg::Admin => Mode::Admin,
        }
    }
}

/// Pace of the plan
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum IntensityArg {
    /// More breaks, easier blocks
    Chill,
    /// Balanced blocks
    Normal,
    /// Longer deep work, short breaks
    Grind,
}

impl From<IntensityArg> for Intensity {
    fn from(val: IntensityArg) -> Self {
        match val {
            IntensityArg::Chill => Intensity::Chill,
            IntensityArg::Normal => Intensity::Normal,
            IntensityArg::Grind => Intensity::Grind,
        }
    }
}

/// How the session felt
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum MoodArg {
    Great,
    Ok,
    Tired,
}

impl From<MoodArg> for Mood {
    fn from(val: MoodArg) -> Self {
        match val {
            MoodArg::Great => Mood::Great,
            MoodArg::Ok => Mood::Ok,
            MoodArg::Tired => Mood::Tired,
        }
    }
}

/// Generate a new plan
#[derive(Args)]
pub struct GeneratePlanArgs {
    /// What you are working on
    pub task: String,
    /// Time budget in minutes
    #[arg(short, long, default_value_t = 60)]
    pub minutes: u32,
    /// Kind of work
    #[arg(long, value_enum, default_value_t = ModeArg::Study)]
    pub mode: ModeArg,
    /// Pace of the plan
    #[arg(long, value_enum, default_value_t = IntensityArg::Normal)]
    pub intensity: IntensityArg,
}

impl From<GeneratePlanArgs> for GeneratePlan {
    fn from(val: GeneratePlanArgs) -> Self {
        GeneratePlan {
            task: val.task,
            total_minutes: val.minutes,
            mode: val.mode.into(),
            intensity: val.intensity.into(),
        }
    }
}

/// Show a plan and its reflections
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan
    pub id: String,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Import a plan from a JSON file
#[derive(Args)]
pub struct ImportPlanArgs {
    /// JSON file with `task`, `total_minutes` and a `plan` array of blocks
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a new plan
    #[command(aliases = ["g", "new"])]
    Generate(GeneratePlanArgs),
    /// Show a plan and its reflections
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Import a plan produced elsewhere
    #[command(alias = "i")]
    Import(ImportPlanArgs),
}

/// List past plans
#[derive(Args)]
pub struct HistoryArgs {
    /// Maximum number of plans to show
    #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub limit: u32,
}

impl From<HistoryArgs> for ListHistory {
    fn from(val: HistoryArgs) -> Self {
        ListHistory { limit: val.limit }
    }
}

/// Summarize recent sessions
#[derive(Args)]
pub struct SummaryArgs {
    /// Number of most recent plans to consider
    #[arg(short, long, default_value_t = DEFAULT_SUMMARY_LIMIT)]
    pub limit: u32,
}

impl From<SummaryArgs> for SummarizeWeek {
    fn from(val: SummaryArgs) -> Self {
        SummarizeWeek { limit: val.limit }
    }
}

/// Run a plan as a focus session
#[derive(Args)]
pub struct RunArgs {
    /// ID of the plan to run
    pub id: String,
    /// Length of one countdown second in milliseconds
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_millis: u64,
    /// Mood to record when the session ends (skips the prompt)
    #[arg(long, value_enum)]
    pub mood: Option<MoodArg>,
    /// Notes to record with the reflection
    #[arg(long)]
    pub notes: Option<String>,
    /// Do not ask for a reflection
    #[arg(long, conflicts_with_all = ["mood", "notes"])]
    pub no_reflect: bool,
}

impl From<RunArgs> for RunOptions {
    fn from(val: RunArgs) -> Self {
        RunOptions {
            plan_id: val.id,
            tick: Duration::from_millis(val.tick_millis),
            mood: val.mood.map(Into::into),
            notes: val.notes,
            reflect: !val.no_reflect,
        }
    }
}

/// Executes CLI commands against the planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => self.generate_plan(&args.into()).await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Import(args) => self.import_plan(args).await,
        }
    }

    async fn generate_plan(&self, params: &GeneratePlan) -> Result<()> {
        let plan = self
            .planner
            .generate_plan(params)
            .await
            .context("Failed to generate plan")?;

        let status = OperationStatus::success(format!(
            "Created plan {}. Start it with `focusflow run {}`.",
            plan.id, plan.id
        ));
        self.renderer.render(&format!("{status}\n{plan}"))
    }

    async fn show_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .planner
            .get_plan(params)
            .await
            .context("Failed to get plan")?
            .with_context(|| format!("Plan with ID {} not found", params.id))?;
        let reflections = self
            .planner
            .list_reflections(params)
            .await
            .context("Failed to list reflections")?;

        self.renderer.render(&format!(
            "{plan}\n## Reflections\n\n{}",
            Reflections(reflections)
        ))
    }

    async fn import_plan(&self, args: ImportPlanArgs) -> Result<()> {
        let content = std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let draft: PlanDraft = serde_json::from_str(&content)
            .with_context(|| format!("Invalid plan JSON in {}", args.file.display()))?;
        debug!("Importing plan '{}' with {} blocks", draft.task, draft.blocks.len());

        let plan = self
            .planner
            .import_plan(draft)
            .await
            .context("Failed to import plan")?;

        let status = OperationStatus::success(format!("Imported plan {}.", plan.id));
        self.renderer.render(&format!("{status}\n{plan}"))
    }

    pub async fn list_history(self, params: &ListHistory) -> Result<()> {
        let history = self
            .planner
            .list_history(params)
            .await
            .context("Failed to list history")?;

        let title = if history.is_empty() { "History" } else { "Recent plans" };
        self.renderer
            .render(&format!("# {title}\n\n{}", History(history)))
    }

    pub async fn weekly_summary(self, params: &SummarizeWeek) -> Result<()> {
        let summary = self
            .planner
            .weekly_summary(params)
            .await
            .context("Failed to compute weekly summary")?;
        self.renderer.render(&summary.to_string())
    }

    pub async fn run(self, options: RunOptions) -> Result<()> {
        run_session(self.planner, &self.renderer, options).await
    }
}
