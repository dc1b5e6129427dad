use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pipeline_waiter::engine::Clock;

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    sleeps: Vec<Duration>,
}

/// Virtual clock: `sleep` advances time instantly and records the request.
///
/// Clones share the same timeline, so a clone handed to the poller and one
/// kept by the test (or by [`ScriptedPipelineApi`](crate::ScriptedPipelineApi))
/// always agree on "now".
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    state: Arc<Mutex<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.lock().unwrap().now
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.state.lock().unwrap().sleeps.clone()
    }

    /// Move time forward without a recorded sleep (e.g. slow API calls).
    pub fn advance(&self, by: Duration) {
        self.state.lock().unwrap().now += by;
    }
}

impl Clock for ManualClock {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        {
            let mut state = self.state.lock().unwrap();
            state.now += duration;
            state.sleeps.push(duration);
        }
        Box::pin(async {})
    }

    fn now(&self) -> Duration {
        self.state.lock().unwrap().now
    }
}
