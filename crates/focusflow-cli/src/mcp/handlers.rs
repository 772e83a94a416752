//! MCP tool handlers implementation

use std::sync::Arc;

use focusflow_core::{
    display::{History, OperationStatus, Reflections},
    params as core, PlanDraft as CorePlanDraft, Planner,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// The core types derive their schema behind the `schema` feature; this
/// wrapper adds the deserialization and schema plumbing the tool router
/// expects without any per-tool wrapper structs.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    fn into_inner(self) -> T {
        self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type GeneratePlan = McpParams<core::GeneratePlan>;
pub type ImportPlan = McpParams<CorePlanDraft>;
pub type ListHistory = McpParams<core::ListHistory>;
pub type SubmitReflection = McpParams<core::SubmitReflection>;
pub type SummarizeWeek = McpParams<core::SummarizeWeek>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(markdown)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<GeneratePlan>) -> McpResult {
        debug!("generate_plan: {:?}", params);

        let plan = self
            .planner
            .generate_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

        let status = OperationStatus::success(format!("Created plan {}.", plan.id));
        text(format!("{status}\n{plan}"))
    }

    pub async fn import_plan(&self, Parameters(params): Parameters<ImportPlan>) -> McpResult {
        debug!("import_plan: {:?}", params);

        let plan = self
            .planner
            .import_plan(params.into_inner())
            .await
            .map_err(|e| to_mcp_error("Failed to import plan", &e))?;

        let status = OperationStatus::success(format!("Imported plan {}.", plan.id));
        text(format!("{status}\n{plan}"))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let id = params.as_ref();
        let plan = self
            .planner
            .get_plan(id)
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(format!("Plan with ID {} not found", id.id), None)
            })?;
        let reflections = self
            .planner
            .list_reflections(id)
            .await
            .map_err(|e| to_mcp_error("Failed to list reflections", &e))?;

        text(format!("{plan}\n## Reflections\n\n{}", Reflections(reflections)))
    }

    pub async fn list_history(&self, Parameters(params): Parameters<ListHistory>) -> McpResult {
        debug!("list_history: {:?}", params);

        let history = self
            .planner
            .list_history(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list history", &e))?;

        let title = if history.is_empty() { "History" } else { "Recent plans" };
        text(format!("# {title}\n\n{}", History(history)))
    }

    pub async fn submit_reflection(
        &self,
        Parameters(params): Parameters<SubmitReflection>,
    ) -> McpResult {
        debug!("submit_reflection: {:?}", params);

        let reflection = self
            .planner
            .submit_reflection(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save reflection", &e))?;

        let status = OperationStatus::success(format!(
            "Saved reflection {} for plan {}.",
            reflection.id, reflection.plan_id
        ));
        text(format!("{status}\n{reflection}"))
    }

    pub async fn weekly_summary(&self, Parameters(params): Parameters<SummarizeWeek>) -> McpResult {
        debug!("weekly_summary: {:?}", params);

        let summary = self
            .planner
            .weekly_summary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to compute weekly summary", &e))?;

        text(summary.to_string())
    }
}
