// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! Every failure ends up as a single failure message at the outcome sink,
//! but the variants stay distinct so callers can branch on [`ErrorKind`].

use std::time::Duration;

use thiserror::Error;

use crate::types::{ExecutionHandle, ExecutionStatus};

/// Failure to start an execution. Never retried.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to start pipeline execution: {0}")]
    Request(String),

    #[error("start pipeline execution returned no execution id")]
    MissingHandle,
}

#[derive(Error, Debug)]
pub enum PipelineWaitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("failed to query execution status: {0}")]
    Poll(String),

    #[error("pipeline execution {execution} {} with status {status}", .status.verb())]
    ExecutionFailed {
        execution: ExecutionHandle,
        status: ExecutionStatus,
    },

    #[error("gave up waiting for pipeline execution {execution} after {waited:?}")]
    Timeout {
        execution: ExecutionHandle,
        waited: Duration,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Coarse classification of a [`PipelineWaitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Launch,
    Poll,
    ExecutionFailed,
    Timeout,
}

impl PipelineWaitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineWaitError::Config(_)
            | PipelineWaitError::Io(_)
            | PipelineWaitError::Toml(_) => ErrorKind::Config,
            PipelineWaitError::Launch(_) => ErrorKind::Launch,
            PipelineWaitError::Poll(_) => ErrorKind::Poll,
            PipelineWaitError::ExecutionFailed { .. } => ErrorKind::ExecutionFailed,
            PipelineWaitError::Timeout { .. } => ErrorKind::Timeout,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineWaitError>;
