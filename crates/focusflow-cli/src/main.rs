//! FocusFlow CLI Application
//!
//! Command-line interface for generating focus plans, running them as
//! countdown sessions and reviewing how they went.

mod args;
mod cli;
mod mcp;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use focusflow_core::{params::ListHistory, PlannerBuilder};
use log::info;
use mcp::{run_stdio_server, FocusFlowMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = PlannerBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    let planner = builder.build().await.context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("FocusFlow started");

    match command {
        Some(Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(History(args)) => Cli::new(planner, renderer).list_history(&args.into()).await,
        Some(Run(args)) => Cli::new(planner, renderer).run(args.into()).await,
        Some(Summary(args)) => {
            Cli::new(planner, renderer)
                .weekly_summary(&args.into())
                .await
        }
        Some(Serve) => {
            info!("Starting FocusFlow MCP server");
            run_stdio_server(FocusFlowMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(planner, renderer)
                .list_history(&ListHistory::default())
                .await
        }
    }
}
