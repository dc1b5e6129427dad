// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod remote;
pub mod report;
pub mod types;

use tracing::{debug, info, warn};

use crate::cli::{CliArgs, LogLevel};
use crate::config::{PollSettings, Settings, load_optional};
use crate::engine::{Clock, Poller, TerminalReport, TokioClock, launch};
use crate::errors::{PipelineWaitError, Result};
use crate::remote::{CodePipelineApi, PipelineApi};
use crate::report::{GithubActionsSink, OUTPUT_EXECUTION_ID, OUTPUT_STATUS, OutcomeSink, report_result};
use crate::types::{Outcome, PipelineName};

/// High-level entry point used by `main.rs`.
///
/// Runs [`run_with`] against the CodePipeline client, the tokio clock and
/// the GitHub Actions sink, and returns the process exit code.
pub async fn run(args: CliArgs) -> i32 {
    let mut sink = GithubActionsSink::from_env();
    run_with(&args, CodePipelineApi::new, TokioClock::new(), &mut sink).await;
    sink.exit_code()
}

/// Resolve settings from `args`, connect, launch, wait and report.
///
/// `connect` builds the remote API from the resolved settings and is not
/// called when resolution fails. Every failure, including invalid
/// settings, is reported through `sink` exactly once.
pub async fn run_with<A, F, C, S>(args: &CliArgs, connect: F, clock: C, sink: &mut S) -> Outcome
where
    A: PipelineApi,
    F: FnOnce(&Settings) -> A,
    C: Clock,
    S: OutcomeSink + ?Sized,
{
    let result = match resolve_settings(args) {
        Ok(settings) => {
            debug!(?settings, "resolved settings");
            let api = connect(&settings);
            launch_and_wait(&api, clock, &settings.pipeline, settings.poll, sink).await
        }
        Err(err) => Err(err),
    };

    report_result(sink, &result)
}

fn resolve_settings(args: &CliArgs) -> Result<Settings> {
    let file = load_optional(args.config.as_deref())?;
    Settings::resolve(args.overrides(), file)
}

/// Install the global log subscriber.
///
/// A failure is reported through `sink`, since nothing else will surface
/// it to the host. Returns whether logging is up.
pub fn init_logging_or_report<S>(level: Option<LogLevel>, sink: &mut S) -> bool
where
    S: OutcomeSink + ?Sized,
{
    match logging::init_logging(level) {
        Ok(()) => true,
        Err(err) => {
            sink.report_failure(&format!("failed to initialise logging: {err}"));
            false
        }
    }
}

/// Start one execution of `pipeline`, wait for it, and report the result.
///
/// The launch-and-wait half of [`run_with`], for callers that already
/// hold resolved settings. Returns the outcome that was reported to `sink`.
pub async fn invoke<A, C, S>(
    api: &A,
    clock: C,
    pipeline: &PipelineName,
    poll: PollSettings,
    sink: &mut S,
) -> Outcome
where
    A: PipelineApi + ?Sized,
    C: Clock,
    S: OutcomeSink + ?Sized,
{
    let result = launch_and_wait(api, clock, pipeline, poll, sink).await;
    report_result(sink, &result)
}

/// Launch, publish the execution id, poll to a terminal status and map a
/// non-success status to [`PipelineWaitError::ExecutionFailed`].
///
/// Does not report the final outcome; callers pass the result to
/// [`report_result`].
pub async fn launch_and_wait<A, C, S>(
    api: &A,
    clock: C,
    pipeline: &PipelineName,
    poll: PollSettings,
    sink: &mut S,
) -> Result<TerminalReport>
where
    A: PipelineApi + ?Sized,
    C: Clock,
    S: OutcomeSink + ?Sized,
{
    let execution = launch(api, pipeline).await?;
    publish(sink, OUTPUT_EXECUTION_ID, execution.as_str());

    let poller = Poller::new(api, clock, poll);
    let report = poller.wait_for_completion(pipeline, &execution).await?;
    publish(sink, OUTPUT_STATUS, report.status.as_str());

    if !report.outcome.is_success() {
        return Err(PipelineWaitError::ExecutionFailed {
            execution,
            status: report.status,
        });
    }

    info!(pipeline = %pipeline, execution = %execution, "pipeline execution succeeded");
    Ok(report)
}

/// Step outputs are advisory: a failed write is logged, not fatal.
fn publish<S: OutcomeSink + ?Sized>(sink: &mut S, name: &str, value: &str) {
    if let Err(err) = sink.set_output(name, value) {
        warn!(output = name, error = %err, "failed to publish step output");
    }
}
