//! Execution harness
//!
//! Runs generated JavaScript in a Node.js child process. The generated code is
//! wrapped into a single script (see [`Harness::bundle`]):
//!
//! ```text
//! <prelude: input(), print()>
//! (function () {
//! <generated code>
//! })();
//! ```
//!
//! The prelude provides the `input` capability the code generator's templates
//! call into. It reads stdin synchronously one byte at a time, so prompts and
//! answers interleave the same way on a terminal and through a pipe.

mod errors;

pub use errors::HarnessError;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;

const DEFAULT_RUNTIME: &str = "node";

/// Definitions available to every program. Scrawl identifiers cannot contain
/// underscores, so the helper names cannot collide with user code.
const PRELUDE: &str = r#"const __scrawl_fs = require("fs");
function input(prompt) {
  if (prompt !== undefined) process.stdout.write(String(prompt));
  const bytes = [];
  const buf = Buffer.alloc(1);
  for (;;) {
    let n;
    try {
      n = __scrawl_fs.readSync(0, buf, 0, 1, null);
    } catch (e) {
      if (e.code === "EAGAIN") continue;
      if (e.code === "EOF") break;
      throw e;
    }
    if (n === 0 || buf[0] === 10) break;
    bytes.push(buf[0]);
  }
  return Buffer.from(bytes).toString("utf8").replace(/\r$/, "");
}
const print = (...args) => console.log(...args);
"#;

/// Result of a run with captured streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub success: bool,
    /// Exit code, `None` when the runtime was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone)]
pub struct Harness {
    node: PathBuf,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_node(DEFAULT_RUNTIME)
    }

    pub fn with_node(node: impl Into<PathBuf>) -> Self {
        Self { node: node.into() }
    }

    pub fn runtime(&self) -> &Path {
        &self.node
    }

    /// Wrap generated code into a self-contained script
    pub fn bundle(code: &str) -> String {
        format!("{}(function () {{\n{}}})();\n", PRELUDE, code)
    }

    /// Whether the runtime can be started at all
    pub fn is_available(&self) -> bool {
        Command::new(&self.node)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Run with the caller's stdin, stdout and stderr
    pub fn run(&self, code: &str) -> Result<(), HarnessError> {
        let status = self
            .command(code)
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if status.success() {
            Ok(())
        } else {
            Err(HarnessError::Failed { status })
        }
    }

    /// Run with `stdin` as the program's input and capture its output.
    ///
    /// A non-zero exit is reported through [`Execution::success`], not as an
    /// error.
    pub fn run_with_input(&self, code: &str, stdin: &str) -> Result<Execution, HarnessError> {
        let mut child = self
            .command(code)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let writer = feed_stdin(&mut child, stdin.to_string());
        let output = child.wait_with_output()?;

        // The program may exit without reading everything it was given
        if let Some(writer) = writer {
            let _ = writer.join();
        }

        Ok(Execution {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn command(&self, code: &str) -> Command {
        let mut command = Command::new(&self.node);
        command.arg("-e").arg(Self::bundle(code));
        command
    }

    fn spawn_error(&self, error: io::Error) -> HarnessError {
        if error.kind() == io::ErrorKind::NotFound {
            HarnessError::RuntimeNotFound {
                program: self.node.display().to_string(),
            }
        } else {
            HarnessError::Spawn(error)
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Write stdin on its own thread so a chatty program cannot deadlock against
/// a full output pipe
fn feed_stdin(child: &mut Child, input: String) -> Option<thread::JoinHandle<io::Result<()>>> {
    let mut pipe = child.stdin.take()?;
    Some(thread::spawn(move || {
        pipe.write_all(input.as_bytes())
        // pipe drops here, closing the child's stdin
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_wraps_code() {
        let bundle = Harness::bundle("console.log(1);\n");
        assert!(bundle.starts_with(PRELUDE));
        assert!(bundle.ends_with("(function () {\nconsole.log(1);\n})();\n"));
    }

    #[test]
    fn test_prelude_defines_builtins() {
        assert!(PRELUDE.contains("function input(prompt)"));
        assert!(PRELUDE.contains("const print ="));
    }

    #[test]
    fn test_missing_runtime() {
        let harness = Harness::with_node("scrawl-no-such-runtime");
        assert!(!harness.is_available());
        assert!(matches!(
            harness.run_with_input("", ""),
            Err(HarnessError::RuntimeNotFound { ref program }) if program == "scrawl-no-such-runtime"
        ));
    }
}
