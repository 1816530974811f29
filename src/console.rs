// ABOUTME: Console trait - the seam between the chat tool and the terminal.
// ABOUTME: StdioConsole is the real implementation over stdin/stdout.

use std::io::{self, BufRead, Write};

/// Line-based console collaborator used by the chat tool.
pub trait Console: Send + Sync {
    /// Display text to the user without appending a newline.
    fn show(&self, text: &str) -> io::Result<()>;

    /// Read one line of input, without its trailing newline.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&self) -> io::Result<Option<String>>;
}

/// Console over the process's stdin and stdout.
pub struct StdioConsole;

impl Console for StdioConsole {
    fn show(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
