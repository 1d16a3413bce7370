use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file {path} does not exist")]
    MissingFile { path: PathBuf },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures returned by the AnyDesk entry points and the process runner.
#[derive(Debug, Error)]
pub enum AnyDeskError {
    #[error("connect: destination must not be empty")]
    DestinationEmpty,
    #[error("install: location must not be empty")]
    LocationEmpty,
    #[error("register license: key must not be empty")]
    KeyEmpty,
    /// The runnable could not be started (not found, permission denied, ...).
    #[error("Failed to start {runnable}: {source}")]
    Spawn {
        runnable: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Feeding stdin or collecting output of the child failed.
    #[error("Stream I/O with {runnable} failed: {source}")]
    Stream {
        runnable: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to wait for {runnable}: {source}")]
    Wait {
        runnable: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{runnable} exited abnormally (exit={exit_code:?})")]
    CommandFailed {
        runnable: PathBuf,
        exit_code: Option<i32>,
    },
}

impl AnyDeskError {
    /// True for errors raised before any process is spawned.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AnyDeskError::DestinationEmpty | AnyDeskError::LocationEmpty | AnyDeskError::KeyEmpty
        )
    }
}
