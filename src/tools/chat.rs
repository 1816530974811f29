// ABOUTME: ChatTool - relays a message to the user and collects their reply.
// ABOUTME: Sentinel lines end the exchange; exactly one of user/system is set.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::console::{Console, StdioConsole};
use crate::error::ToolError;
use crate::tool::{Tool, ToolResult};

/// Line that ends reply collection.
pub const END_SENTINEL: &str = "/end";
/// Line that marks the user as busy and ends the exchange.
pub const BUSY_SENTINEL: &str = "/busy";

const BUSY_NOTICE: &str = "The user is busy right now. Please try again later.";
const EMPTY_REPLY_NOTICE: &str = "The user did not provide a message.";

/// Outcome of one chat exchange.
///
/// Exactly one field is populated: `user` when the user actually replied,
/// `system` when the exchange ended with a busy or empty reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl ChatReply {
    fn from_user(text: String) -> Self {
        Self {
            user: Some(text),
            system: None,
        }
    }

    fn from_system(notice: &str) -> Self {
        Self {
            user: None,
            system: Some(notice.to_string()),
        }
    }
}

/// Send `message` to the user and collect their line-based reply.
///
/// Any console failure is classified `Unexpected`, with the outbound message
/// in context.
pub fn chat(console: &dyn Console, message: &str) -> Result<ChatReply, ToolError> {
    collect_reply(console, message).map_err(|e| {
        ToolError::unexpected("failed to exchange messages with the user", e)
            .with_context("message", message)
    })
}

fn collect_reply(console: &dyn Console, message: &str) -> std::io::Result<ChatReply> {
    console.show(&format!("\nAI: {message}"))?;
    console.show("\nYou: ")?;

    let mut lines = Vec::new();
    loop {
        match console.read_line()? {
            None => break,
            Some(line) if line == END_SENTINEL => break,
            // A busy reply discards anything typed before it.
            Some(line) if line == BUSY_SENTINEL => {
                return Ok(ChatReply::from_system(BUSY_NOTICE));
            }
            Some(line) => lines.push(line),
        }
    }

    let user = lines.join("\n").trim().to_string();
    if user.is_empty() {
        Ok(ChatReply::from_system(EMPTY_REPLY_NOTICE))
    } else {
        Ok(ChatReply::from_user(user))
    }
}

/// Tool that relays a message to the user and waits for their response.
pub struct ChatTool {
    console: Box<dyn Console>,
}

impl ChatTool {
    /// Chat over the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_console(Box::new(StdioConsole))
    }

    /// Chat over a custom console collaborator.
    pub fn with_console(console: Box<dyn Console>) -> Self {
        Self { console }
    }
}

impl Default for ChatTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ChatTool {
    fn name(&self) -> &str {
        "chat"
    }

    fn description(&self) -> &str {
        "Send a message to the user and wait for their response."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The message to send to the user"
                }
            },
            "required": ["message"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            message: String,
        }
        let params: Params = serde_json::from_value(params)?;
        if params.message.is_empty() {
            anyhow::bail!("message cannot be empty");
        }

        match chat(self.console.as_ref(), &params.message) {
            Ok(reply) => Ok(ToolResult::json(&reply)),
            Err(err) => Ok(ToolResult::from_tool_error(&err)),
        }
    }
}
