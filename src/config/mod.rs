//! Load and validate the `granny.toml` configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod anydesk;
pub mod flags;
pub mod telemetry;

pub use anydesk::{parse_anydesk_section, AnyDeskSection, RawAnyDeskSection};
pub use flags::{
    parse_connect_section, parse_install_section, parse_settings_section, ConnectDefaults,
    InstallDefaults, RawConnectSection, RawInstallSection, RawSettingsSection, SettingsDefaults,
};

pub const CONFIG_ENV_KEY: &str = "GRANNY_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "granny.toml";

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

impl ConfigSource {
    /// Only the implicit default file may be absent.
    pub const fn is_explicit(&self) -> bool {
        !matches!(self, ConfigSource::Default)
    }
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrannyConfig {
    pub anydesk: AnyDeskSection,
    pub connect: ConnectDefaults,
    pub install: InstallDefaults,
    pub settings: SettingsDefaults,
    /// `None` when built-in defaults were used.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawGrannyConfig {
    anydesk: Option<RawAnyDeskSection>,
    connect: Option<RawConnectSection>,
    install: Option<RawInstallSection>,
    settings: Option<RawSettingsSection>,
}

impl GrannyConfig {
    /// Load `path`, falling back to defaults only when the implicit default file is missing.
    pub fn load(path: PathBuf, source: ConfigSource) -> Result<Self, ConfigError> {
        if !path.exists() {
            if source.is_explicit() {
                return Err(ConfigError::MissingFile { path });
            }
            telemetry::log_default_missing(&path);
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "granny::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "granny::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawGrannyConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "granny::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "granny::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawGrannyConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let anydesk = parse_anydesk_section(raw.anydesk, &path)?;
        Ok(Self {
            anydesk,
            connect: parse_connect_section(raw.connect),
            install: parse_install_section(raw.install),
            settings: parse_settings_section(raw.settings),
            source_path: Some(path),
        })
    }
}
