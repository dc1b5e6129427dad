// src/report/mod.rs

//! Outcome reporting towards the invoking automation host.
//!
//! The host only needs to know success vs. failure (with a message), plus a
//! few named step outputs. [`GithubActionsSink`] speaks the GitHub Actions
//! workflow-command protocol; tests use a recording sink.

use tracing::{error, info};

use crate::engine::TerminalReport;
use crate::errors::Result;
use crate::types::Outcome;

pub mod github;

pub use github::GithubActionsSink;

/// Output name carrying the started execution id.
pub const OUTPUT_EXECUTION_ID: &str = "execution-id";
/// Output name carrying the terminal execution status.
pub const OUTPUT_STATUS: &str = "status";

pub trait OutcomeSink: Send {
    /// Publish a named step output.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    fn report_success(&mut self);

    fn report_failure(&mut self, message: &str);
}

/// Hand the final result of an invocation to `sink`. Call exactly once.
pub fn report_result<S>(sink: &mut S, result: &Result<TerminalReport>) -> Outcome
where
    S: OutcomeSink + ?Sized,
{
    match result {
        Ok(report) => {
            info!(status = %report.status, polls = report.polls, "reporting success");
            sink.report_success();
            Outcome::Success
        }
        Err(err) => {
            error!(kind = ?err.kind(), error = %err, "reporting failure");
            sink.report_failure(&err.to_string());
            Outcome::Failure
        }
    }
}
