// ABOUTME: ReadFileTool - reads the full text of a validated file path.
// ABOUTME: Propagates validator failures unchanged; read faults are Unexpected.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ToolError;
use crate::path::ValidPath;
use crate::tool::{Tool, ToolResult};

/// Read the whole file at `path` as text.
///
/// Either the complete content comes back or a classified error does;
/// partial content is never returned.
pub fn read_file(path: &str) -> Result<String, ToolError> {
    let valid = ValidPath::validate(path)?;
    std::fs::read_to_string(valid.as_path()).map_err(|e| {
        // The file can vanish between the probe and the read; that race is
        // Unexpected, not a missing-file classification.
        ToolError::unexpected(format!("failed to read file at {valid}"), e)
            .with_context("path", path)
    })
}

/// Tool for reading file contents.
pub struct ReadFileTool;

#[async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read the content of a file. Returns the file contents as text."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The absolute path to the file to read"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            path: String,
        }
        let params: Params = serde_json::from_value(params)?;
        if params.path.is_empty() {
            anyhow::bail!("path cannot be empty");
        }

        match read_file(&params.path) {
            Ok(content) => Ok(ToolResult::text(content)),
            Err(err) => Ok(ToolResult::from_tool_error(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::error::FILE_DOES_NOT_EXIST;

    #[test]
    fn test_read_file_returns_full_content() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "line one\nline two").unwrap();

        let content = read_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(content, "line one\nline two");
    }

    #[test]
    fn test_read_file_missing_path() {
        let err = read_file("/nonexistent/file.txt").unwrap_err();
        assert!(matches!(err, ToolError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_tool_success() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Hello, world!").unwrap();

        let tool = ReadFileTool;
        let result = tool
            .execute(serde_json::json!({
                "path": file.path().to_str().unwrap()
            }))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(result.content.contains("Hello, world!"));
    }

    #[tokio::test]
    async fn test_tool_not_found_renders_envelope() {
        let tool = ReadFileTool;
        let result = tool
            .execute(serde_json::json!({
                "path": "/nonexistent/file.txt"
            }))
            .await
            .unwrap();

        assert!(result.is_error);
        let payload: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(payload["code"], FILE_DOES_NOT_EXIST);
        assert_eq!(payload["context"]["invalid_path"], "/nonexistent/file.txt");
    }

    #[tokio::test]
    async fn test_tool_rejects_empty_path() {
        let tool = ReadFileTool;
        let err = tool.execute(serde_json::json!({ "path": "" })).await;
        assert!(err.is_err());
    }
}
