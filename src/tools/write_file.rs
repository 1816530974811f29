// ABOUTME: WriteFileTool - writes content to a file, creating or overwriting it.
// ABOUTME: Creates parent directories if needed; failures are Unexpected.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ToolError;
use crate::tool::{Tool, ToolResult};

/// Write `content` to `path`, creating the file if absent and fully
/// overwriting it if present. Missing parent directories are created first.
///
/// Not atomic: a failure mid-write can leave a partially written file, and
/// the pre-write content is not preserved on failure.
pub fn write_file(path: &str, content: &str) -> Result<String, ToolError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ToolError::unexpected(
                    format!("failed to create parent directories for {path}"),
                    e,
                )
                .with_context("path", path)
            })?;
        }
    }

    std::fs::write(path, content).map_err(|e| {
        ToolError::unexpected(format!("failed to write file at {path}"), e)
            .with_context("path", path)
    })?;

    Ok(format!(
        "Successfully wrote {} bytes to {}",
        content.len(),
        path
    ))
}

/// Tool for writing content to files.
pub struct WriteFileTool;

#[async_trait]
impl Tool for WriteFileTool {
    fn name(&self) -> &str {
        "write_file"
    }

    fn description(&self) -> &str {
        "Write content to a file. Creates a new file or overwrites an existing file."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The absolute path to the file to write. It will be created if it does not exist."
                },
                "content": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The content to write to the file"
                }
            },
            "required": ["path", "content"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            path: String,
            content: String,
        }
        let params: Params = serde_json::from_value(params)?;
        if params.path.is_empty() {
            anyhow::bail!("path cannot be empty");
        }
        if params.content.is_empty() {
            anyhow::bail!("content cannot be empty");
        }

        match write_file(&params.path, &params.content) {
            Ok(confirmation) => Ok(ToolResult::text(confirmation)),
            Err(err) => Ok(ToolResult::from_tool_error(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::error::UNEXPECTED_ERROR;
    use crate::tools::read_file;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        let path = path.to_str().unwrap();

        let confirmation = write_file(path, "X").unwrap();
        assert!(confirmation.contains(path));
        assert_eq!(read_file(path).unwrap(), "X");
    }

    #[test]
    fn test_write_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        let path = path.to_str().unwrap();

        write_file(path, "same content").unwrap();
        write_file(path, "same content").unwrap();
        assert_eq!(read_file(path).unwrap(), "same content");
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        let path = path.to_str().unwrap();

        write_file(path, "before").unwrap();
        write_file(path, "after").unwrap();
        assert_eq!(read_file(path).unwrap(), "after");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("note.txt");

        write_file(path.to_str().unwrap(), "nested content").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_to_unwritable_location() {
        // A regular file where a parent directory is expected.
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let target = blocker.join("note.txt");
        let target = target.to_str().unwrap();
        let err = write_file(target, "content").unwrap_err();
        match err {
            ToolError::Unexpected { context, .. } => {
                assert_eq!(context["path"], target);
            }
            other => panic!("expected Unexpected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_tool_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");

        let tool = WriteFileTool;
        let result = tool
            .execute(serde_json::json!({
                "path": path.to_str().unwrap(),
                "content": "Hello, world!"
            }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(result.content.contains("Successfully wrote"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hello, world!");
    }

    #[tokio::test]
    async fn test_tool_failure_renders_envelope() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let target = blocker.join("note.txt");

        let tool = WriteFileTool;
        let result = tool
            .execute(serde_json::json!({
                "path": target.to_str().unwrap(),
                "content": "content"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
        let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(payload["code"], UNEXPECTED_ERROR);
        assert_eq!(payload["context"]["path"], target.to_str().unwrap());
    }

    #[tokio::test]
    async fn test_tool_rejects_empty_content() {
        let tool = WriteFileTool;
        let err = tool
            .execute(serde_json::json!({ "path": "/tmp/x.txt", "content": "" }))
            .await;
        assert!(err.is_err());
    }
}
