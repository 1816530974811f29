// ABOUTME: ToolDefinition - the shape the hosting runtime consumes when
// ABOUTME: advertising available tools to an LLM.

use serde::{Deserialize, Serialize};

/// Definition of a tool for the hosting runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}
