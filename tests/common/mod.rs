#![allow(dead_code)]

use std::time::Duration;

use pipeline_waiter::config::PollSettings;
use pipeline_waiter::types::PipelineName;

pub use pipeline_waiter_test_utils::{
    ApiCall, ManualClock, RecordingSink, ScriptedPipelineApi, SinkEvent, init_tracing,
    with_timeout,
};

pub const INITIAL_DELAY: Duration = Duration::from_secs(10);
pub const INTERVAL: Duration = Duration::from_secs(30);

/// 10s before the first query, 30s between queries, no timeout.
pub fn poll_settings() -> PollSettings {
    PollSettings {
        initial_delay: INITIAL_DELAY,
        interval: INTERVAL,
        timeout: None,
    }
}

pub fn poll_settings_with_timeout(timeout: Duration) -> PollSettings {
    PollSettings {
        timeout: Some(timeout),
        ..poll_settings()
    }
}

pub fn pipeline() -> PipelineName {
    PipelineName::new("deploy-prod")
}
