// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every input can also come from the environment. The `INPUT_*` names are
//! how a GitHub Actions runner passes `with:` inputs to an action.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Overrides;

/// Command-line arguments for `pipeline-waiter`.
#[derive(Clone, Parser)]
#[command(
    name = "pipeline-waiter",
    version,
    about = "Start a CodePipeline execution and wait until it finishes.",
    long_about = None
)]
pub struct CliArgs {
    /// AWS region of the pipeline. Falls back to `AWS_REGION`.
    #[arg(long, env = "INPUT_AWS-REGION", value_name = "REGION")]
    pub aws_region: Option<String>,

    /// Access key id used to sign requests.
    #[arg(long, env = "INPUT_AWS-ACCESS-KEY", hide_env_values = true, value_name = "KEY")]
    pub aws_access_key: Option<String>,

    /// Secret access key used to sign requests.
    #[arg(long, env = "INPUT_AWS-SECRET-KEY", hide_env_values = true, value_name = "SECRET")]
    pub aws_secret_key: Option<String>,

    /// Name of the pipeline to start.
    #[arg(long, env = "INPUT_PIPELINE-NAME", value_name = "NAME")]
    pub pipeline_name: Option<String>,

    /// Wait before the first status query (e.g. `10s`).
    #[arg(long, env = "INPUT_INITIAL-DELAY", value_name = "DURATION")]
    pub initial_delay: Option<String>,

    /// Wait between status queries; must exceed the initial delay (e.g. `30s`).
    #[arg(long, env = "INPUT_POLL-INTERVAL", value_name = "DURATION")]
    pub poll_interval: Option<String>,

    /// Give up after this long (e.g. `2h`). Default: wait until terminal.
    #[arg(long, env = "INPUT_TIMEOUT", value_name = "DURATION")]
    pub timeout: Option<String>,

    /// Optional TOML settings file (`[aws]`, `[pipeline]`, `[poll]`).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PIPELINE_WAITER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl std::fmt::Debug for CliArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliArgs")
            .field("overrides", &self.overrides())
            .field("config", &self.config)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl CliArgs {
    /// Invocation inputs, ready to merge over the settings file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            region: self
                .aws_region
                .clone()
                .or_else(|| std::env::var("AWS_REGION").ok()),
            access_key_id: self.aws_access_key.clone(),
            secret_access_key: self.aws_secret_key.clone(),
            pipeline_name: self.pipeline_name.clone(),
            initial_delay: self.initial_delay.clone(),
            interval: self.poll_interval.clone(),
            timeout: self.timeout.clone(),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
