//! Error taxonomy for the orchestration pipeline.
//!
//! Three classes of failure flow through the runner, each with its own
//! propagation rule: configuration errors abort before any side effect,
//! engine execution errors surface to the top-level caller, and report
//! write errors are logged and swallowed so a bad write can never lose
//! the results that follow it.

use std::time::Duration;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required setting is missing, or a value is not part of its
    /// enumeration. Raised before any external process is launched. The
    /// message already names the offending value and the valid options.
    #[error("{0}")]
    InvalidConfiguration(String),

    /// The external test engine could not be launched, or exited with a
    /// failure status. Fatal to the invocation; never retried.
    #[error("Test engine execution failed: {message}")]
    ProcessExecution {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A file-system failure while writing a report entry or header.
    /// Recovered locally by the recorder; never fatal to the run.
    #[error("Report write failed: {0}")]
    ReportWrite(#[source] std::io::Error),

    /// The interactive prompt sequence was interrupted or failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A polled condition did not hold before the deadline.
    #[error("Condition was not met after {elapsed:?} (deadline {deadline:?})")]
    WaitTimeout {
        elapsed: Duration,
        deadline: Duration,
    },
}

impl Error {
    /// Builds a `ProcessExecution` error without an io source, e.g. for a
    /// non-zero exit status.
    pub fn process(message: impl Into<String>) -> Self {
        Error::ProcessExecution {
            message: message.into(),
            source: None,
        }
    }

    /// Builds a `ProcessExecution` error wrapping the io error that caused
    /// it, e.g. a failed spawn.
    pub fn process_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Error::ProcessExecution {
            message: message.into(),
            source: Some(source),
        }
    }
}
