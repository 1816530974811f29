// ABOUTME: ExecuteScriptTool - runs a validated script file through the shell.
// ABOUTME: Blocks until exit or timeout; a timed-out run is killed, not failed.

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::error::ToolError;
use crate::path::ValidPath;
use crate::tool::{Tool, ToolResult};

/// Minimum accepted timeout in milliseconds.
pub const MIN_TIMEOUT_MS: u64 = 1_000;
/// Maximum accepted timeout in milliseconds.
pub const MAX_TIMEOUT_MS: u64 = 300_000;
/// Timeout applied when the caller does not specify one.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

// How long after a kill the pipe drains may keep reading before the adapter
// stops waiting for them.
const PIPE_GRACE: Duration = Duration::from_millis(200);

/// Captured output of a finished (or killed) script run.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, absent when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Termination signal. Non-null distinguishes "ran and was killed"
    /// (e.g. on timeout) from "ran and finished".
    pub signal: Option<i32>,
}

/// Run the script at `path` through the platform shell and wait for it to
/// finish or time out.
///
/// Non-zero exits and timeouts both come back as `Ok`: the run happened and
/// its outcome is reported through `exit_code` and `signal`. Only launch-level
/// faults (shell missing, spawn denied) are errors. The script executes with
/// this process's privileges and no sandboxing, which is why the path must
/// pass validation first.
pub async fn execute_script(path: &str, timeout_ms: u64) -> Result<ScriptOutput, ToolError> {
    let valid = ValidPath::validate(path)?;

    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = tokio::process::Command::new("cmd.exe");
        c.arg("/C").arg(valid.as_str());
        c
    } else {
        let mut c = tokio::process::Command::new("bash");
        c.arg(valid.as_str());
        c
    };
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|e| {
        ToolError::unexpected(format!("failed to launch script at {valid}"), e)
            .with_context("path", path)
    })?;

    // Drain both pipes concurrently so a chatty script cannot deadlock
    // against a full pipe buffer while we wait on it.
    let (stdout_task, stdout_buf) = spawn_drain(child.stdout.take());
    let (stderr_task, stderr_buf) = spawn_drain(child.stderr.take());

    let timeout = Duration::from_millis(timeout_ms);
    let (status, timed_out) = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(status) => {
            let status = status.map_err(|e| {
                ToolError::unexpected(format!("failed waiting on script at {valid}"), e)
                    .with_context("path", path)
            })?;
            (status, false)
        }
        Err(_) => {
            // Kill the child, then reap it so the termination signal shows
            // up in the exit status.
            let _ = child.start_kill();
            let status = child.wait().await.map_err(|e| {
                ToolError::unexpected(format!("failed to reap timed-out script at {valid}"), e)
                    .with_context("path", path)
            })?;
            (status, true)
        }
    };

    // A killed shell can leave grandchildren that inherited the pipes, so
    // after a timeout the drains may never see EOF. Give them a short grace
    // and return with whatever was captured.
    finish_drain(stdout_task, timed_out).await;
    finish_drain(stderr_task, timed_out).await;

    let stdout = String::from_utf8_lossy(&stdout_buf.lock().await).into_owned();
    let stderr = String::from_utf8_lossy(&stderr_buf.lock().await).into_owned();

    Ok(ScriptOutput {
        stdout,
        stderr,
        exit_code: status.code(),
        signal: termination_signal(&status, timed_out),
    })
}

/// Read `pipe` to completion in the background, accumulating into a buffer
/// the caller can inspect even if the reader is abandoned mid-stream.
fn spawn_drain<R>(pipe: Option<R>) -> (JoinHandle<()>, Arc<Mutex<Vec<u8>>>)
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    let buf = Arc::new(Mutex::new(Vec::new()));
    let task = tokio::spawn({
        let buf = Arc::clone(&buf);
        async move {
            let Some(mut pipe) = pipe else { return };
            let mut chunk = [0u8; 4096];
            loop {
                match pipe.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.lock().await.extend_from_slice(&chunk[..n]),
                }
            }
        }
    });
    (task, buf)
}

async fn finish_drain(mut task: JoinHandle<()>, bounded: bool) {
    if bounded {
        if tokio::time::timeout(PIPE_GRACE, &mut task).await.is_err() {
            task.abort();
        }
    } else {
        let _ = task.await;
    }
}

#[cfg(unix)]
fn termination_signal(status: &std::process::ExitStatus, _timed_out: bool) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &std::process::ExitStatus, timed_out: bool) -> Option<i32> {
    // Windows reports a plain exit code even for a killed process; surface
    // the forced termination through the signal slot.
    if timed_out { Some(9) } else { None }
}

/// Tool for executing script files.
pub struct ExecuteScriptTool;

#[async_trait]
impl Tool for ExecuteScriptTool {
    fn name(&self) -> &str {
        "execute_script"
    }

    fn description(&self) -> &str {
        "Execute a script file and wait for it to complete. This call is blocking. \
         Returns stdout, stderr, exit code, and termination signal."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The absolute path to the script file to execute"
                },
                "timeout_ms": {
                    "type": "integer",
                    "minimum": MIN_TIMEOUT_MS,
                    "maximum": MAX_TIMEOUT_MS,
                    "default": DEFAULT_TIMEOUT_MS,
                    "description": "How long to wait before killing the script, in milliseconds"
                }
            },
            "required": ["path"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            path: String,
            timeout_ms: Option<u64>,
        }
        let params: Params = serde_json::from_value(params)?;
        if params.path.is_empty() {
            anyhow::bail!("path cannot be empty");
        }
        let timeout_ms = params.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
        if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&timeout_ms) {
            anyhow::bail!("timeout_ms must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS}");
        }

        match execute_script(&params.path, timeout_ms).await {
            Ok(output) => Ok(ToolResult::json(&output)),
            Err(err) => Ok(ToolResult::from_tool_error(&err)),
        }
    }
}
