// src/remote/codepipeline.rs

//! [`PipelineApi`] backed by AWS CodePipeline.

use std::fmt;

use aws_sdk_codepipeline::Client;
use aws_sdk_codepipeline::config::retry::RetryConfig;
use aws_sdk_codepipeline::config::{BehaviorVersion, Credentials as SdkCredentials, Region};
use aws_sdk_codepipeline::error::DisplayErrorContext;
use tracing::debug;

use crate::config::Settings;
use crate::remote::{ApiFuture, PipelineApi, RemoteError};
use crate::types::{ExecutionHandle, PipelineName};

const CREDENTIALS_PROVIDER: &str = "pipeline-waiter-inputs";

/// CodePipeline client configured with static credentials and an explicit
/// region.
///
/// SDK-level retries are disabled: a retried `StartPipelineExecution` could
/// start a second execution.
pub struct CodePipelineApi {
    client: Client,
}

impl fmt::Debug for CodePipelineApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodePipelineApi").finish_non_exhaustive()
    }
}

impl CodePipelineApi {
    pub fn new(settings: &Settings) -> Self {
        let credentials = SdkCredentials::new(
            settings.credentials.access_key_id(),
            settings.credentials.secret_access_key(),
            None,
            None,
            CREDENTIALS_PROVIDER,
        );

        let config = aws_sdk_codepipeline::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled())
            .build();

        debug!(region = %settings.region, "built CodePipeline client");

        Self {
            client: Client::from_conf(config),
        }
    }
}

impl PipelineApi for CodePipelineApi {
    fn start_execution<'a>(&'a self, pipeline: &'a PipelineName) -> ApiFuture<'a, Option<String>> {
        Box::pin(async move {
            let output = self
                .client
                .start_pipeline_execution()
                .name(pipeline.as_str())
                .send()
                .await
                .map_err(|err| RemoteError::new(DisplayErrorContext(&err).to_string()))?;

            debug!(?output, "StartPipelineExecution response");
            Ok(output.pipeline_execution_id().map(str::to_owned))
        })
    }

    fn execution_status<'a>(
        &'a self,
        pipeline: &'a PipelineName,
        execution: &'a ExecutionHandle,
    ) -> ApiFuture<'a, String> {
        Box::pin(async move {
            let output = self
                .client
                .get_pipeline_execution()
                .pipeline_name(pipeline.as_str())
                .pipeline_execution_id(execution.as_str())
                .send()
                .await
                .map_err(|err| RemoteError::new(DisplayErrorContext(&err).to_string()))?;

            output
                .pipeline_execution()
                .and_then(|exec| exec.status())
                .map(|status| status.as_str().to_string())
                .ok_or_else(|| {
                    RemoteError::new(format!(
                        "GetPipelineExecution returned no status for execution {execution}"
                    ))
                })
        })
    }
}
