// src/config/model.rs

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::config::credentials::Credentials;
use crate::types::PipelineName;

/// Optional settings file as read from TOML.
///
/// ```toml
/// [aws]
/// region = "eu-west-1"
///
/// [pipeline]
/// name = "deploy-prod"
///
/// [poll]
/// initial_delay = "10s"
/// interval = "30s"
/// timeout = "2h"
/// ```
///
/// Every section and key is optional. Credentials are deliberately not part
/// of the file format.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSettingsFile {
    #[serde(default)]
    pub aws: AwsSection,

    #[serde(default)]
    pub pipeline: PipelineSection,

    #[serde(default)]
    pub poll: PollSection,
}

/// `[aws]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwsSection {
    #[serde(default)]
    pub region: Option<String>,
}

/// `[pipeline]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineSection {
    #[serde(default)]
    pub name: Option<String>,
}

/// `[poll]` section. Durations use the `10s` / `500ms` / `2m` / `1h` form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollSection {
    #[serde(default)]
    pub initial_delay: Option<String>,

    #[serde(default)]
    pub interval: Option<String>,

    #[serde(default)]
    pub timeout: Option<String>,
}

/// Values supplied by the invocation itself (CLI flags or host environment).
///
/// These take precedence over the settings file.
#[derive(Clone, Default)]
pub struct Overrides {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub pipeline_name: Option<String>,
    pub initial_delay: Option<String>,
    pub interval: Option<String>,
    pub timeout: Option<String>,
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("Overrides")
            .field("region", &self.region)
            .field("access_key_id", &redact(&self.access_key_id))
            .field("secret_access_key", &redact(&self.secret_access_key))
            .field("pipeline_name", &self.pipeline_name)
            .field("initial_delay", &self.initial_delay)
            .field("interval", &self.interval)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Fully resolved, validated settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub region: String,
    pub credentials: Credentials,
    pub pipeline: PipelineName,
    pub poll: PollSettings,
}

/// Timing of the completion poller.
///
/// The first status query happens after `initial_delay`; every following
/// query waits `interval`. `interval` is always longer than `initial_delay`.
/// Without a `timeout` the poller waits until the execution is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub initial_delay: Duration,
    pub interval: Duration,
    pub timeout: Option<Duration>,
}

pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}
