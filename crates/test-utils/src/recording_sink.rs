use std::sync::{Arc, Mutex};

use pipeline_waiter::errors::Result;
use pipeline_waiter::report::OutcomeSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Output { name: String, value: String },
    Success,
    Failure(String),
}

/// Outcome sink that records every call for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Success/failure reports only, ignoring outputs.
    pub fn reports(&self) -> Vec<SinkEvent> {
        self.events()
            .into_iter()
            .filter(|e| !matches!(e, SinkEvent::Output { .. }))
            .collect()
    }

    pub fn output(&self, name: &str) -> Option<String> {
        self.events().into_iter().find_map(|e| match e {
            SinkEvent::Output { name: n, value } if n == name => Some(value),
            _ => None,
        })
    }
}

impl OutcomeSink for RecordingSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.events.lock().unwrap().push(SinkEvent::Output {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn report_success(&mut self) {
        self.events.lock().unwrap().push(SinkEvent::Success);
    }

    fn report_failure(&mut self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Failure(message.to_string()));
    }
}
