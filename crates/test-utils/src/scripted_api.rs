use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use pipeline_waiter::remote::{ApiFuture, PipelineApi, RemoteError};
use pipeline_waiter::types::{ExecutionHandle, PipelineName};

use crate::manual_clock::ManualClock;

/// One recorded call against the scripted API, stamped with virtual time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Start {
        pipeline: String,
        at: Duration,
    },
    Status {
        pipeline: String,
        execution: String,
        at: Duration,
    },
}

/// A fake remote pipeline API that:
/// - answers the start request from a script (id, no id, or error)
/// - answers successive status queries from a queue
/// - records every call with the [`ManualClock`] time it arrived at.
///
/// Running out of scripted statuses is reported as an error, so a poller
/// that keeps querying fails loudly instead of spinning.
#[derive(Debug)]
pub struct ScriptedPipelineApi {
    clock: ManualClock,
    start: Mutex<Result<Option<String>, RemoteError>>,
    statuses: Mutex<VecDeque<Result<String, RemoteError>>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedPipelineApi {
    /// Starts succeed with execution id `exec-1`; no statuses scripted yet.
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            start: Mutex::new(Ok(Some("exec-1".to_string()))),
            statuses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn start_returns(self, id: Option<&str>) -> Self {
        *self.start.lock().unwrap() = Ok(id.map(str::to_string));
        self
    }

    pub fn start_fails(self, message: &str) -> Self {
        *self.start.lock().unwrap() = Err(RemoteError::new(message));
        self
    }

    pub fn then_status(self, status: &str) -> Self {
        self.statuses
            .lock()
            .unwrap()
            .push_back(Ok(status.to_string()));
        self
    }

    pub fn then_statuses(self, statuses: &[&str]) -> Self {
        statuses.iter().fold(self, |api, s| api.then_status(s))
    }

    pub fn then_status_error(self, message: &str) -> Self {
        self.statuses
            .lock()
            .unwrap()
            .push_back(Err(RemoteError::new(message)));
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn start_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ApiCall::Start { .. }))
            .count()
    }

    /// Virtual times at which status queries arrived.
    pub fn status_query_times(&self) -> Vec<Duration> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ApiCall::Status { at, .. } => Some(at),
                ApiCall::Start { .. } => None,
            })
            .collect()
    }

    pub fn status_count(&self) -> usize {
        self.status_query_times().len()
    }
}

impl PipelineApi for ScriptedPipelineApi {
    fn start_execution<'a>(&'a self, pipeline: &'a PipelineName) -> ApiFuture<'a, Option<String>> {
        self.calls.lock().unwrap().push(ApiCall::Start {
            pipeline: pipeline.to_string(),
            at: self.clock.now(),
        });
        let answer = self.start.lock().unwrap().clone();
        Box::pin(async move { answer })
    }

    fn execution_status<'a>(
        &'a self,
        pipeline: &'a PipelineName,
        execution: &'a ExecutionHandle,
    ) -> ApiFuture<'a, String> {
        self.calls.lock().unwrap().push(ApiCall::Status {
            pipeline: pipeline.to_string(),
            execution: execution.to_string(),
            at: self.clock.now(),
        });
        let answer = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::new("status script exhausted")));
        Box::pin(async move { answer })
    }
}
