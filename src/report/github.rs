// src/report/github.rs

//! GitHub Actions outcome sink.
//!
//! - Failure: `::error::<message>` on stdout and exit code 1.
//! - Success: exit code 0, nothing printed.
//! - Outputs: appended to the file named by `GITHUB_OUTPUT`.
//!
//! Logs go to stderr (see [`crate::logging`]), so stdout carries only
//! workflow commands.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::errors::{PipelineWaitError, Result};
use crate::report::OutcomeSink;

const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";
const HEREDOC_DELIMITER: &str = "ghadelimiter_pipeline_waiter";

#[derive(Debug)]
pub struct GithubActionsSink<W: Write + Send = Stdout> {
    out: W,
    output_file: Option<PathBuf>,
    exit_code: i32,
}

impl GithubActionsSink<Stdout> {
    /// Sink writing commands to stdout and outputs to `$GITHUB_OUTPUT`.
    pub fn from_env() -> Self {
        let output_file = env::var_os(OUTPUT_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(io::stdout(), output_file)
    }
}

impl<W: Write + Send> GithubActionsSink<W> {
    pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
        Self {
            out,
            output_file,
            exit_code: 0,
        }
    }

    /// Process exit code reflecting what was reported.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> OutcomeSink for GithubActionsSink<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        let Some(path) = &self.output_file else {
            info!(output = %name, value = %value, "step output (no {OUTPUT_FILE_ENV} file)");
            return Ok(());
        };

        let entry = format_output(name, value)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(entry.as_bytes())?;
        Ok(())
    }

    fn report_success(&mut self) {
        self.exit_code = 0;
    }

    fn report_failure(&mut self, message: &str) {
        self.exit_code = 1;
        if let Err(err) = writeln!(self.out, "::error::{}", escape_data(message)) {
            warn!(error = %err, "failed to write failure annotation");
        }
        if let Err(err) = self.out.flush() {
            warn!(error = %err, "failed to flush stdout");
        }
    }
}

/// Escape a workflow-command message.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Render one `GITHUB_OUTPUT` entry; multi-line values use the heredoc form.
fn format_output(name: &str, value: &str) -> Result<String> {
    if !value.contains('\n') && !value.contains('\r') {
        return Ok(format!("{name}={value}\n"));
    }
    if value.contains(HEREDOC_DELIMITER) {
        return Err(PipelineWaitError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("output '{name}' contains the reserved delimiter"),
        )));
    }
    Ok(format!(
        "{name}<<{HEREDOC_DELIMITER}\n{value}\n{HEREDOC_DELIMITER}\n"
    ))
}
