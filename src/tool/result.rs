// ABOUTME: ToolResult and the error envelope - the single place a ToolError
// ABOUTME: is translated into the runtime-visible payload shape.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ToolError;

/// Result of a tool execution as seen by the hosting runtime.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The output content: plain text for textual tools, JSON otherwise.
    pub content: String,

    /// Whether this result represents an error.
    pub is_error: bool,

    /// Optional metadata about the execution.
    pub metadata: HashMap<String, serde_json::Value>,
}

/// The uniform error payload rendered for failed executions.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&ToolError> for ErrorPayload {
    fn from(err: &ToolError) -> Self {
        match err {
            ToolError::FileNotFound { invalid_path } => Self {
                code: err.code(),
                message: err.to_string(),
                cause: None,
                context: HashMap::from([(
                    "invalid_path".to_string(),
                    serde_json::Value::String(invalid_path.clone()),
                )]),
            },
            ToolError::Unexpected { cause, context, .. } => Self {
                code: err.code(),
                message: err.to_string(),
                cause: Some(format!("{cause:#}")),
                context: context.clone(),
            },
        }
    }
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
            metadata: HashMap::new(),
        }
    }

    /// Create a successful structured JSON result.
    ///
    /// A value that fails to serialize is rendered through the same error
    /// envelope as any other failure.
    pub fn json(value: &impl Serialize) -> Self {
        match serde_json::to_string(value) {
            Ok(content) => Self::text(content),
            Err(e) => Self::from_tool_error(&ToolError::unexpected(
                "failed to serialize tool output",
                e,
            )),
        }
    }

    /// Create an error result from a free-form message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
            metadata: HashMap::new(),
        }
    }

    /// Render a classified adapter error as the uniform envelope.
    ///
    /// Every adapter failure funnels through here; no adapter builds its own
    /// error payload, which keeps the shape identical across tools.
    pub fn from_tool_error(err: &ToolError) -> Self {
        tracing::error!(code = err.code(), error = %err, "tool execution failed");
        let payload = ErrorPayload::from(err);
        let content =
            serde_json::to_string(&payload).unwrap_or_else(|_| payload.message.clone());
        Self {
            content,
            is_error: true,
            metadata: HashMap::new(),
        }
        .with_metadata("code", err.code())
    }

    /// Add metadata to the result.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.metadata.insert(key.into(), v);
        }
        self
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::text("")
    }
}
