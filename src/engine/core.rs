// src/engine/core.rs

//! Pure poll state machine.
//!
//! [`PollState`] consumes observed [`ExecutionStatus`]es and answers two
//! questions for the IO shell (`engine::poller::Poller`):
//! - how long to wait before the next status query, and
//! - whether (and with which outcome) polling is finished.
//!
//! The answer comes back as a [`PollStep`].
//!
//! It has no Tokio types, no clock and performs no IO, so every transition
//! is unit tested directly.

use std::time::Duration;

use crate::config::PollSettings;
use crate::types::{ExecutionStatus, Outcome};

/// What the IO shell should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep {
    /// Sleep for the given delay, then issue one status query.
    Wait(Duration),
    /// Polling is over.
    Finished(TerminalReport),
}

/// What the poller saw when the execution left `InProgress`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalReport {
    pub status: ExecutionStatus,
    pub outcome: Outcome,
    /// Number of status queries issued, including the terminal one.
    pub polls: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    /// Still waiting for a terminal status. `polls` counts queries so far.
    InProgress { polls: u32 },
    /// Absorbing exit state.
    Terminal { status: ExecutionStatus, polls: u32 },
}

impl PollState {
    pub fn new() -> Self {
        PollState::InProgress { polls: 0 }
    }

    /// Feed one observed status into the machine.
    ///
    /// Once terminal, further observations are ignored.
    pub fn observe(self, status: ExecutionStatus) -> PollState {
        match self {
            PollState::InProgress { polls } if status.is_terminal() => PollState::Terminal {
                status,
                polls: polls + 1,
            },
            PollState::InProgress { polls } => PollState::InProgress { polls: polls + 1 },
            terminal @ PollState::Terminal { .. } => terminal,
        }
    }

    /// Next action: wait the initial delay before the first query, the
    /// steady interval before every later one, and stop once terminal.
    pub fn next_step(&self, settings: &PollSettings) -> PollStep {
        match self {
            PollState::InProgress { polls: 0 } => PollStep::Wait(settings.initial_delay),
            PollState::InProgress { .. } => PollStep::Wait(settings.interval),
            PollState::Terminal { status, polls } => PollStep::Finished(TerminalReport {
                status: status.clone(),
                outcome: status.outcome().unwrap_or(Outcome::Failure),
                polls: *polls,
            }),
        }
    }

    pub fn polls(&self) -> u32 {
        match self {
            PollState::InProgress { polls } | PollState::Terminal { polls, .. } => *polls,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PollState::Terminal { .. })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            PollState::InProgress { .. } => None,
            PollState::Terminal { status, .. } => status.outcome(),
        }
    }
}

impl Default for PollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PollSettings {
        PollSettings {
            initial_delay: Duration::from_secs(10),
            interval: Duration::from_secs(30),
            timeout: None,
        }
    }

    #[test]
    fn first_delay_is_initial_then_interval() {
        let state = PollState::new();
        assert_eq!(state.next_step(&settings()), PollStep::Wait(Duration::from_secs(10)));

        let state = state.observe(ExecutionStatus::InProgress);
        assert_eq!(state.next_step(&settings()), PollStep::Wait(Duration::from_secs(30)));

        let state = state.observe(ExecutionStatus::InProgress);
        assert_eq!(state.next_step(&settings()), PollStep::Wait(Duration::from_secs(30)));
        assert_eq!(state.polls(), 2);
    }

    #[test]
    fn terminal_status_ends_polling() {
        let state = PollState::new()
            .observe(ExecutionStatus::InProgress)
            .observe(ExecutionStatus::Succeeded);

        assert!(state.is_terminal());
        assert_eq!(
            state.next_step(&settings()),
            PollStep::Finished(TerminalReport {
                status: ExecutionStatus::Succeeded,
                outcome: Outcome::Success,
                polls: 2,
            })
        );
        assert_eq!(state.outcome(), Some(Outcome::Success));
    }

    #[test]
    fn terminal_state_is_absorbing() {
        let state = PollState::new().observe(ExecutionStatus::Failed);
        let again = state.clone().observe(ExecutionStatus::InProgress);
        assert_eq!(state, again);

        let twice = again.observe(ExecutionStatus::Failed);
        assert_eq!(state, twice);
        assert_eq!(twice.outcome(), Some(Outcome::Failure));
    }

    #[test]
    fn in_progress_has_no_outcome() {
        let state = PollState::new().observe(ExecutionStatus::InProgress);
        assert_eq!(state.outcome(), None);
        assert!(!state.is_terminal());
    }
}
