//! Errors raised while running generated code

use std::io;
use std::process::ExitStatus;

/// Failures of the execution harness. Compile errors never reach the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The JavaScript runtime executable could not be found
    #[error("JavaScript runtime '{program}' not found; install Node.js or pass --node")]
    RuntimeNotFound { program: String },

    #[error("failed to start JavaScript runtime: {0}")]
    Spawn(#[from] io::Error),

    /// The program ran but the runtime reported failure
    #[error("program failed ({status})")]
    Failed { status: ExitStatus },
}
