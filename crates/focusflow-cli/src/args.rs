use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{HistoryArgs, PlanCommands, RunArgs, SummaryArgs};

/// Turn a task and a time budget into timed work blocks, then run them
///
/// FocusFlow generates a plan of focus blocks (warm-up, deep work, breaks,
/// review), runs it as a countdown that moves from block to block on its
/// own, and records how the session felt. Plans, reflections and a weekly
/// summary are kept in a local SQLite database. It can also run as an MCP
/// (Model Context Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "focusflow")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/focusflow/focusflow.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the FocusFlow CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate, import and inspect plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// List past plans, newest first
    #[command(aliases = ["h", "ls"])]
    History(HistoryArgs),
    /// Run a plan as a focus session
    #[command(alias = "r")]
    Run(RunArgs),
    /// Summarize recent sessions
    #[command(alias = "s")]
    Summary(SummaryArgs),
    /// Start the MCP server
    Serve,
}
