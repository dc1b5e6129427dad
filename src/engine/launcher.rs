// src/engine/launcher.rs

use tracing::{error, info};

use crate::errors::LaunchError;
use crate::remote::PipelineApi;
use crate::types::{ExecutionHandle, PipelineName};

/// Start exactly one execution of `pipeline` and return its handle.
///
/// There is no retry here: a second attempt after an ambiguous failure could
/// start a duplicate execution.
pub async fn launch<A>(api: &A, pipeline: &PipelineName) -> Result<ExecutionHandle, LaunchError>
where
    A: PipelineApi + ?Sized,
{
    info!(pipeline = %pipeline, "starting pipeline execution");

    let raw = api.start_execution(pipeline).await.map_err(|err| {
        error!(pipeline = %pipeline, error = %err, "start pipeline execution failed");
        LaunchError::Request(err.to_string())
    })?;

    let handle = ExecutionHandle::parse(raw.as_deref()).ok_or_else(|| {
        error!(pipeline = %pipeline, "start pipeline execution returned no execution id");
        LaunchError::MissingHandle
    })?;

    info!(pipeline = %pipeline, execution = %handle, "pipeline execution started");
    Ok(handle)
}
