// src/remote/mod.rs

//! Remote pipeline API abstraction.
//!
//! The launcher and the poller talk to a [`PipelineApi`] instead of a
//! concrete SDK client. Production code uses [`CodePipelineApi`]; tests
//! provide a scripted implementation that never touches the network.
//!
//! The contract is exactly two operations: start one execution, and query
//! the status of an execution. Neither is retried by this crate.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

use crate::types::{ExecutionHandle, PipelineName};

pub mod codepipeline;

pub use codepipeline::CodePipelineApi;

/// A failed remote call (transport, auth, not-found, malformed response).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Boxed future returned by [`PipelineApi`] operations.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, RemoteError>> + Send + 'a>>;

/// The two remote operations the core depends on.
pub trait PipelineApi: Send + Sync {
    /// Start one execution of `pipeline`.
    ///
    /// Resolves to the raw execution id from the response, which may be
    /// absent; the launcher decides what an unusable id means.
    fn start_execution<'a>(&'a self, pipeline: &'a PipelineName) -> ApiFuture<'a, Option<String>>;

    /// Query the current status string of one execution.
    fn execution_status<'a>(
        &'a self,
        pipeline: &'a PipelineName,
        execution: &'a ExecutionHandle,
    ) -> ApiFuture<'a, String>;
}

impl<T: PipelineApi + ?Sized> PipelineApi for Arc<T> {
    fn start_execution<'a>(&'a self, pipeline: &'a PipelineName) -> ApiFuture<'a, Option<String>> {
        (**self).start_execution(pipeline)
    }

    fn execution_status<'a>(
        &'a self,
        pipeline: &'a PipelineName,
        execution: &'a ExecutionHandle,
    ) -> ApiFuture<'a, String> {
        (**self).execution_status(pipeline, execution)
    }
}
