// src/types.rs

//! Value types shared by the launcher, the poller and the reporting layer.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Name of a registered remote pipeline.
///
/// Validity is decided by the remote service; locally we only require that
/// the name is not blank (checked during settings resolution).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PipelineName(String);

impl PipelineName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PipelineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of one pipeline execution, as handed out by the remote
/// service when the execution is started.
///
/// Always non-empty: the only constructor is [`ExecutionHandle::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecutionHandle(String);

impl ExecutionHandle {
    /// Accept a raw identifier from the remote service.
    ///
    /// Returns `None` for a missing or blank identifier. Anything else is
    /// kept exactly as received.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status of an execution as reported by the remote service.
///
/// `InProgress` is the only non-terminal member. Every other value,
/// including statuses this crate has never heard of, is terminal.
/// Matching is exact and case-sensitive: `"succeeded"` is not `Succeeded`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExecutionStatus {
    InProgress,
    Succeeded,
    Failed,
    Stopped,
    Stopping,
    Superseded,
    Cancelled,
    /// Any status string not listed above.
    Other(String),
}

impl ExecutionStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "InProgress" => ExecutionStatus::InProgress,
            "Succeeded" => ExecutionStatus::Succeeded,
            "Failed" => ExecutionStatus::Failed,
            "Stopped" => ExecutionStatus::Stopped,
            "Stopping" => ExecutionStatus::Stopping,
            "Superseded" => ExecutionStatus::Superseded,
            "Cancelled" => ExecutionStatus::Cancelled,
            other => ExecutionStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExecutionStatus::InProgress => "InProgress",
            ExecutionStatus::Succeeded => "Succeeded",
            ExecutionStatus::Failed => "Failed",
            ExecutionStatus::Stopped => "Stopped",
            ExecutionStatus::Stopping => "Stopping",
            ExecutionStatus::Superseded => "Superseded",
            ExecutionStatus::Cancelled => "Cancelled",
            ExecutionStatus::Other(s) => s,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ExecutionStatus::InProgress)
    }

    /// Outcome of a terminal status; `None` while still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            ExecutionStatus::InProgress => None,
            ExecutionStatus::Succeeded => Some(Outcome::Success),
            _ => Some(Outcome::Failure),
        }
    }

    /// Past-tense verb used in failure messages.
    pub(crate) fn verb(&self) -> &'static str {
        match self {
            ExecutionStatus::Failed => "failed",
            ExecutionStatus::Stopped | ExecutionStatus::Stopping => "stopped",
            ExecutionStatus::Cancelled => "was cancelled",
            ExecutionStatus::Superseded => "was superseded",
            _ => "ended",
        }
    }
}

impl FromStr for ExecutionStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ExecutionStatus::parse(s))
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final pass/fail result of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> bool {
        outcome.is_success()
    }
}
