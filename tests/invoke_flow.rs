// tests/invoke_flow.rs

mod common;
use crate::common::{
    INITIAL_DELAY, ManualClock, RecordingSink, ScriptedPipelineApi, SinkEvent, init_tracing,
    pipeline, poll_settings, with_timeout,
};

use pipeline_waiter::report::GithubActionsSink;
use pipeline_waiter::types::Outcome;
use pipeline_waiter::{invoke, launch_and_wait};

fn output(name: &str, value: &str) -> SinkEvent {
    SinkEvent::Output {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[tokio::test]
async fn successful_execution_reports_success_once() {
    init_tracing();
    let clock = ManualClock::new();
    let api = ScriptedPipelineApi::new(clock.clone())
        .start_returns(Some("exec-42"))
        .then_statuses(&["InProgress", "Succeeded"]);
    let mut sink = RecordingSink::new();

    let outcome = with_timeout(invoke(&api, clock, &pipeline(), poll_settings(), &mut sink)).await;

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        sink.events(),
        vec![
            output("execution-id", "exec-42"),
            output("status", "Succeeded"),
            SinkEvent::Success,
        ]
    );
    assert_eq!(api.start_count(), 1);
}

#[tokio::test]
async fn failed_execution_reports_status_in_message() {
    let clock = ManualClock::new();
    let api = ScriptedPipelineApi::new(clock.clone()).then_statuses(&["InProgress", "Stopped"]);
    let mut sink = RecordingSink::new();

    let outcome = with_timeout(invoke(&api, clock, &pipeline(), poll_settings(), &mut sink)).await;

    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(sink.output("status").as_deref(), Some("Stopped"));
    assert_eq!(
        sink.reports(),
        vec![SinkEvent::Failure(
            "pipeline execution exec-1 stopped with status Stopped".to_string()
        )]
    );
}

#[tokio::test]
async fn missing_execution_id_fails_without_any_status_query() {
    for id in [None, Some(""), Some("  ")] {
        let clock = ManualClock::new();
        let api = ScriptedPipelineApi::new(clock.clone())
            .start_returns(id)
            .then_status("Succeeded");
        let mut sink = RecordingSink::new();

        let outcome =
            with_timeout(invoke(&api, clock.clone(), &pipeline(), poll_settings(), &mut sink)).await;

        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(
            sink.events(),
            vec![SinkEvent::Failure(
                "start pipeline execution returned no execution id".to_string()
            )]
        );
        assert_eq!(api.status_count(), 0);
        assert!(clock.sleeps().is_empty());
    }
}

#[tokio::test]
async fn start_error_is_reported_and_not_retried() {
    let clock = ManualClock::new();
    let api = ScriptedPipelineApi::new(clock.clone())
        .start_fails("PipelineNotFoundException: deploy-prod")
        .then_status("Succeeded");
    let mut sink = RecordingSink::new();

    let outcome = with_timeout(invoke(&api, clock, &pipeline(), poll_settings(), &mut sink)).await;

    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(api.start_count(), 1);
    assert_eq!(api.status_count(), 0);
    match sink.reports().as_slice() {
        [SinkEvent::Failure(msg)] => {
            assert!(msg.starts_with("failed to start pipeline execution"));
            assert!(msg.contains("PipelineNotFoundException"));
        }
        other => panic!("expected a single failure report, got {other:?}"),
    }
}

#[tokio::test]
async fn poll_error_reports_transport_message() {
    let clock = ManualClock::new();
    let api = ScriptedPipelineApi::new(clock.clone())
        .then_status("InProgress")
        .then_status_error("dispatch failure: timed out")
        .then_status("Succeeded");
    let mut sink = RecordingSink::new();

    let outcome = with_timeout(invoke(&api, clock, &pipeline(), poll_settings(), &mut sink)).await;

    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(api.status_count(), 2);
    assert_eq!(sink.output("status"), None);
    assert_eq!(
        sink.reports(),
        vec![SinkEvent::Failure(
            "failed to query execution status: dispatch failure: timed out".to_string()
        )]
    );
}

#[tokio::test]
async fn launch_happens_before_the_first_sleep() {
    let clock = ManualClock::new();
    let api = ScriptedPipelineApi::new(clock.clone()).then_status("Succeeded");
    let mut sink = RecordingSink::new();

    let report = with_timeout(launch_and_wait(&api, clock, &pipeline(), poll_settings(), &mut sink))
        .await
        .expect("execution succeeds");

    assert_eq!(report.polls, 1);
    assert_eq!(
        api.calls(),
        vec![
            common::ApiCall::Start {
                pipeline: "deploy-prod".into(),
                at: std::time::Duration::ZERO,
            },
            common::ApiCall::Status {
                pipeline: "deploy-prod".into(),
                execution: "exec-1".into(),
                at: INITIAL_DELAY,
            },
        ]
    );
}

#[tokio::test]
async fn github_sink_gets_error_annotation_on_failure() {
    let clock = ManualClock::new();
    let api = ScriptedPipelineApi::new(clock.clone()).then_status("Failed");
    let mut sink = GithubActionsSink::new(Vec::new(), None);

    let outcome = with_timeout(invoke(&api, clock, &pipeline(), poll_settings(), &mut sink)).await;

    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(sink.exit_code(), 1);
    let stdout = String::from_utf8(sink.into_inner()).expect("utf-8 output");
    assert_eq!(stdout, "::error::pipeline execution exec-1 failed with status Failed\n");
}
