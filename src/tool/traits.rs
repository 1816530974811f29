// ABOUTME: Defines the Tool trait - the contract each adapter exposes to the runtime.
// ABOUTME: Tools have a name, description, schema, and async execute method.

use async_trait::async_trait;

use super::ToolResult;

/// A tool that can be invoked by an agent runtime.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the LLM.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given parameters.
    ///
    /// Returns `Err` only when `params` violate the input schema (missing or
    /// empty fields, out-of-range values). Every failure past the shape check
    /// is rendered into the [`ToolResult`] error envelope instead, so no
    /// adapter failure crosses this boundary as an exception.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}
