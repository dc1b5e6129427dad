// src/config/validate.rs

use crate::config::credentials::Credentials;
use crate::config::duration::parse_duration;
use crate::config::model::{Overrides, PollSettings, RawSettingsFile, Settings};
use crate::errors::{PipelineWaitError, Result};
use crate::types::PipelineName;

impl Settings {
    /// Merge invocation inputs over the settings file and validate.
    ///
    /// Blank strings count as absent, so an unset action input does not
    /// mask a value from the file.
    pub fn resolve(overrides: Overrides, file: RawSettingsFile) -> Result<Settings> {
        let region = required(
            "aws-region",
            pick(overrides.region, file.aws.region),
        )?;
        let access_key_id = required("aws-access-key", present(overrides.access_key_id))?;
        let secret_access_key = required("aws-secret-key", present(overrides.secret_access_key))?;
        let pipeline_name = required(
            "pipeline-name",
            pick(overrides.pipeline_name, file.pipeline.name),
        )?;

        let defaults = PollSettings::default();
        let initial_delay = match pick(overrides.initial_delay, file.poll.initial_delay) {
            Some(raw) => duration("initial-delay", &raw)?,
            None => defaults.initial_delay,
        };
        let interval = match pick(overrides.interval, file.poll.interval) {
            Some(raw) => duration("poll-interval", &raw)?,
            None => defaults.interval,
        };
        let timeout = pick(overrides.timeout, file.poll.timeout)
            .map(|raw| duration("timeout", &raw))
            .transpose()?;

        let poll = PollSettings {
            initial_delay,
            interval,
            timeout,
        };
        validate_poll_settings(&poll)?;

        Ok(Settings {
            region,
            credentials: Credentials::new(access_key_id, secret_access_key),
            pipeline: PipelineName::new(pipeline_name),
            poll,
        })
    }
}

/// Check the two-phase polling shape and the timeout.
pub fn validate_poll_settings(poll: &PollSettings) -> Result<()> {
    if poll.interval.is_zero() {
        return Err(PipelineWaitError::Config(
            "poll-interval must be greater than zero".to_string(),
        ));
    }
    if poll.interval <= poll.initial_delay {
        return Err(PipelineWaitError::Config(format!(
            "poll-interval ({:?}) must be longer than initial-delay ({:?})",
            poll.interval, poll.initial_delay
        )));
    }
    if poll.timeout.is_some_and(|t| t.is_zero()) {
        return Err(PipelineWaitError::Config(
            "timeout must be greater than zero when set".to_string(),
        ));
    }
    Ok(())
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn pick(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    present(primary).or_else(|| present(fallback))
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| PipelineWaitError::Config(format!("input '{name}' is required")))
}

fn duration(name: &str, raw: &str) -> Result<std::time::Duration> {
    parse_duration(raw).map_err(|e| PipelineWaitError::Config(format!("invalid {name}: {e}")))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::model::{AwsSection, PipelineSection, PollSection};

    fn full_overrides() -> Overrides {
        Overrides {
            region: Some("eu-west-1".into()),
            access_key_id: Some("AKIAEXAMPLE".into()),
            secret_access_key: Some("secret".into()),
            pipeline_name: Some("deploy".into()),
            ..Overrides::default()
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_tuned() {
        let settings = Settings::resolve(full_overrides(), RawSettingsFile::default()).unwrap();
        assert_eq!(settings.poll, PollSettings::default());
        assert_eq!(settings.pipeline.as_str(), "deploy");
        assert_eq!(settings.region, "eu-west-1");
    }

    #[test]
    fn overrides_win_over_file_and_blanks_fall_through() {
        let file = RawSettingsFile {
            aws: AwsSection {
                region: Some("us-east-1".into()),
            },
            pipeline: PipelineSection {
                name: Some("from-file".into()),
            },
            poll: PollSection {
                initial_delay: Some("2s".into()),
                interval: Some("5s".into()),
                timeout: Some("1h".into()),
            },
        };
        let overrides = Overrides {
            region: Some("   ".into()),
            interval: Some("20s".into()),
            ..full_overrides()
        };

        let settings = Settings::resolve(overrides, file).unwrap();
        assert_eq!(settings.region, "us-east-1");
        assert_eq!(settings.pipeline.as_str(), "deploy");
        assert_eq!(settings.poll.initial_delay, Duration::from_secs(2));
        assert_eq!(settings.poll.interval, Duration::from_secs(20));
        assert_eq!(settings.poll.timeout, Some(Duration::from_secs(3600)));
    }

    #[test]
    fn missing_secret_is_a_config_error() {
        let overrides = Overrides {
            secret_access_key: None,
            ..full_overrides()
        };
        match Settings::resolve(overrides, RawSettingsFile::default()) {
            Err(PipelineWaitError::Config(msg)) => assert!(msg.contains("aws-secret-key")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn interval_must_exceed_initial_delay() {
        let overrides = Overrides {
            initial_delay: Some("30s".into()),
            interval: Some("30s".into()),
            ..full_overrides()
        };
        assert!(matches!(
            Settings::resolve(overrides, RawSettingsFile::default()),
            Err(PipelineWaitError::Config(_))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let overrides = Overrides {
            timeout: Some("0s".into()),
            ..full_overrides()
        };
        assert!(matches!(
            Settings::resolve(overrides, RawSettingsFile::default()),
            Err(PipelineWaitError::Config(_))
        ));
    }
}
