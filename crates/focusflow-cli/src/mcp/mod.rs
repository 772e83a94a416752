//! MCP server implementation for FocusFlow
//!
//! Exposes plan generation, history, reflections and the weekly summary to
//! AI assistants over the Model Context Protocol. Running a countdown is
//! interactive and stays in the terminal.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use focusflow_core::Planner;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    GeneratePlan, Id, ImportPlan, ListHistory, McpResult, SubmitReflection, SummarizeWeek,
};

/// MCP server for FocusFlow
#[derive(Clone)]
pub struct FocusFlowMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FocusFlowMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(Arc::clone(&self.planner))
    }

    #[tool(
        name = "generate_plan",
        description = "Generate and store a focus plan for a task. Requires task and total_minutes; optional mode (study, coding, admin; default study) and intensity (chill, normal, grind; default normal). Returns the plan ID and its ordered blocks (warm-up, deep work, breaks, review) whose minutes add up to the budget."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "import_plan",
        description = "Store a hand-written plan. Provide task and plan, a list of blocks (each with title, minutes >= 1, details, difficulty) and optionally total_minutes, mode, intensity, focus_tip and energy_level. Block minutes are reconciled with total_minutes when it is given."
    )]
    async fn import_plan(&self, params: Parameters<ImportPlan>) -> McpResult {
        self.handlers().import_plan(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show a stored plan by ID with all its blocks and the reflections recorded after running it."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "list_history",
        description = "List recently generated plans, newest first. Optional limit (default 10)."
    )]
    async fn list_history(&self, params: Parameters<ListHistory>) -> McpResult {
        self.handlers().list_history(params).await
    }

    #[tool(
        name = "submit_reflection",
        description = "Record how a finished session went. Requires plan_id and mood (great, ok, tired); notes are optional free text."
    )]
    async fn submit_reflection(&self, params: Parameters<SubmitReflection>) -> McpResult {
        self.handlers().submit_reflection(params).await
    }

    #[tool(
        name = "weekly_summary",
        description = "Summarize recent plans and reflections: session count, planned minutes, top tasks, themes and suggestions for next week. Optional limit of plans to consider (default 20)."
    )]
    async fn weekly_summary(&self, params: Parameters<SummarizeWeek>) -> McpResult {
        self.handlers().weekly_summary(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FocusFlowMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "focusflow".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"FocusFlow turns a task and a time budget into a focus plan and keeps a history of how sessions went.

## Core Concepts
- **Plans**: An ordered list of timed blocks (warm-up, deep work, breaks, review) for one task
- **Reflections**: A mood (great/ok/tired) and optional notes recorded after a session

## Workflow
1. Create a plan with `generate_plan`, or `import_plan` for a hand-written one
2. The user runs it in the terminal with `focusflow run <id>`
3. Record the outcome with `submit_reflection`
4. Review progress with `list_history`, `show_plan` and `weekly_summary`"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: FocusFlowMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting FocusFlow MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
