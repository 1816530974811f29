// ABOUTME: The four action adapters - file read/write, script execution, chat.
// ABOUTME: Each file holds a typed adapter function plus its Tool wrapper.

mod chat;
mod execute_script;
mod read_file;
mod write_file;

pub use chat::{BUSY_SENTINEL, ChatReply, ChatTool, END_SENTINEL, chat};
pub use execute_script::{
    DEFAULT_TIMEOUT_MS, ExecuteScriptTool, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS, ScriptOutput,
    execute_script,
};
pub use read_file::{ReadFileTool, read_file};
pub use write_file::{WriteFileTool, write_file};
