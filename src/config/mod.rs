// src/config/mod.rs

//! Settings resolution for pipeline-waiter.
//!
//! Responsibilities:
//! - Define the optional TOML settings file and the resolved model (`model.rs`).
//! - Load a settings file from disk (`loader.rs`).
//! - Merge invocation inputs over the file and validate the result (`validate.rs`).
//! - Parse human-friendly durations (`duration.rs`).
//! - Keep credentials out of debug output and logs (`credentials.rs`).

pub mod credentials;
pub mod duration;
pub mod loader;
pub mod model;
pub mod validate;

pub use credentials::Credentials;
pub use duration::parse_duration;
pub use loader::{load_from_path, load_optional};
pub use model::{
    AwsSection, Overrides, PipelineSection, PollSection, PollSettings, RawSettingsFile, Settings,
};
