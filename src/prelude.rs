// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use toolbelt::prelude::*;` to get started quickly.

pub use crate::console::{Console, StdioConsole};
pub use crate::error::{FILE_DOES_NOT_EXIST, ToolError, UNEXPECTED_ERROR};
pub use crate::path::ValidPath;
pub use crate::tool::{ErrorPayload, Registry, Tool, ToolDefinition, ToolResult};
pub use crate::tools::{
    ChatReply, ChatTool, ExecuteScriptTool, ReadFileTool, ScriptOutput, WriteFileTool, chat,
    execute_script, read_file, write_file,
};
