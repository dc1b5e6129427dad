// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::RawSettingsFile;
use crate::errors::Result;

/// Load a settings file from a given path.
///
/// This only performs TOML deserialization; merging with invocation inputs
/// and validation happen in [`Settings::resolve`](crate::config::Settings::resolve).
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSettingsFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let file: RawSettingsFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), "loaded settings file");

    Ok(file)
}

/// Load the settings file if one was given, otherwise start from an empty one.
pub fn load_optional(path: Option<&Path>) -> Result<RawSettingsFile> {
    match path {
        Some(path) => load_from_path(path),
        None => Ok(RawSettingsFile::default()),
    }
}
