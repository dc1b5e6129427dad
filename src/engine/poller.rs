// src/engine/poller.rs

use std::fmt;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::PollSettings;
use crate::engine::clock::Clock;
use crate::engine::core::{PollState, PollStep, TerminalReport};
use crate::errors::{PipelineWaitError, Result};
use crate::remote::PipelineApi;
use crate::types::{ExecutionHandle, ExecutionStatus, PipelineName};

/// Drives [`PollState`] against a [`PipelineApi`] and a [`Clock`].
///
/// This is the IO shell around the pure state machine: it sleeps, issues
/// one status query at a time, and feeds the answers back into the core.
/// A failed query is returned immediately; nothing is retried.
pub struct Poller<'a, A: ?Sized, C> {
    api: &'a A,
    clock: C,
    settings: PollSettings,
}

impl<A: ?Sized, C> fmt::Debug for Poller<'_, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poller")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl<'a, A, C> Poller<'a, A, C>
where
    A: PipelineApi + ?Sized,
    C: Clock,
{
    pub fn new(api: &'a A, clock: C, settings: PollSettings) -> Self {
        Self {
            api,
            clock,
            settings,
        }
    }

    /// Block until `execution` reaches a terminal status.
    ///
    /// Without a configured timeout this waits indefinitely.
    pub async fn wait_for_completion(
        &self,
        pipeline: &PipelineName,
        execution: &ExecutionHandle,
    ) -> Result<TerminalReport> {
        let started = self.clock.now();
        let mut state = PollState::new();

        info!(
            execution = %execution,
            initial_delay = ?self.settings.initial_delay,
            interval = ?self.settings.interval,
            timeout = ?self.settings.timeout,
            "waiting for pipeline execution to finish"
        );

        loop {
            let delay = match state.next_step(&self.settings) {
                PollStep::Wait(delay) => delay,
                PollStep::Finished(report) => {
                    info!(
                        execution = %execution,
                        status = %report.status,
                        polls = report.polls,
                        success = report.outcome.is_success(),
                        "pipeline execution reached terminal status"
                    );
                    return Ok(report);
                }
            };

            self.check_deadline(started, delay, execution)?;

            debug!(execution = %execution, ?delay, "sleeping before next status query");
            self.clock.sleep(delay).await;

            let status = self.query(pipeline, execution).await?;
            state = state.observe(status);

            if !state.is_terminal() {
                info!(
                    execution = %execution,
                    polls = state.polls(),
                    "pipeline execution still in progress"
                );
            }
        }
    }

    async fn query(
        &self,
        pipeline: &PipelineName,
        execution: &ExecutionHandle,
    ) -> Result<ExecutionStatus> {
        let raw = self
            .api
            .execution_status(pipeline, execution)
            .await
            .map_err(|err| {
                error!(execution = %execution, error = %err, "status query failed");
                PipelineWaitError::Poll(err.to_string())
            })?;

        let status = ExecutionStatus::parse(&raw);
        debug!(execution = %execution, status = %status, "status query returned");
        Ok(status)
    }

    /// Fail with `Timeout` if sleeping `delay` would overrun the deadline.
    fn check_deadline(
        &self,
        started: Duration,
        delay: Duration,
        execution: &ExecutionHandle,
    ) -> Result<()> {
        let Some(timeout) = self.settings.timeout else {
            return Ok(());
        };

        let waited = self.clock.now().saturating_sub(started);
        if waited.checked_add(delay).is_none_or(|end| end > timeout) {
            error!(execution = %execution, ?waited, ?timeout, "timed out waiting for pipeline execution");
            return Err(PipelineWaitError::Timeout {
                execution: execution.clone(),
                waited,
            });
        }
        Ok(())
    }
}
