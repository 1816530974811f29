// ABOUTME: Defines the error taxonomy for toolbelt using thiserror.
// ABOUTME: Two kinds only: FileNotFound (expected) and Unexpected (diagnostic).

use std::collections::HashMap;

/// Boundary code for a definitively missing file.
pub const FILE_DOES_NOT_EXIST: &str = "FILE_DOES_NOT_EXIST";

/// Boundary code for any unanticipated failure.
pub const UNEXPECTED_ERROR: &str = "UNEXPECTED_ERROR";

/// Errors from tool adapters.
///
/// `FileNotFound` is expected and recoverable by the caller (ask for another
/// path). `Unexpected` always carries the original cause plus contextual
/// identifiers so the failure can be reproduced. Adapters communicate failure
/// through their result value only; nothing panics across the boundary.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("file does not exist: {invalid_path}")]
    FileNotFound { invalid_path: String },

    #[error("{message}")]
    Unexpected {
        message: String,
        #[source]
        cause: anyhow::Error,
        context: HashMap<String, serde_json::Value>,
    },
}

impl ToolError {
    /// Create an `Unexpected` error from any cause.
    pub fn unexpected(message: impl Into<String>, cause: impl Into<anyhow::Error>) -> Self {
        Self::Unexpected {
            message: message.into(),
            cause: cause.into(),
            context: HashMap::new(),
        }
    }

    /// Attach a contextual identifier (the offending path, the outbound
    /// message). No-op for `FileNotFound`, which already carries its path.
    pub fn with_context(mut self, key: impl Into<String>, value: impl serde::Serialize) -> Self {
        if let Self::Unexpected { context, .. } = &mut self {
            if let Ok(v) = serde_json::to_value(value) {
                context.insert(key.into(), v);
            }
        }
        self
    }

    /// The stable code rendered into the boundary error payload.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => FILE_DOES_NOT_EXIST,
            Self::Unexpected { .. } => UNEXPECTED_ERROR,
        }
    }
}
