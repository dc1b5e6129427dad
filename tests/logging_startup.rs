// tests/logging_startup.rs
//
// Installs the global subscriber, so it lives in its own test binary.

mod common;
use crate::common::{RecordingSink, SinkEvent};

use pipeline_waiter::{init_logging_or_report, logging};

#[test]
fn logging_setup_failure_is_reported_to_the_host() {
    let _ = logging::init_logging(None);

    let mut sink = RecordingSink::new();
    assert!(!init_logging_or_report(None, &mut sink));

    match sink.events().as_slice() {
        [SinkEvent::Failure(message)] => {
            assert!(message.starts_with("failed to initialise logging"), "{message}")
        }
        other => panic!("expected a single failure, got {other:?}"),
    }
}
