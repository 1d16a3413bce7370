//! CLI argument definitions and `Invocation` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{resolve_config_path, Invocation};

/// AnyDesk operations exposed as subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Open a session to an AnyDesk address.
    Connect(ConnectArgs),
    /// Install AnyDesk into a directory.
    Install(InstallArgs),
    /// Register a license key with the local installation.
    #[command(name = "register-license")]
    RegisterLicense(RegisterLicenseArgs),
    /// Open a settings page.
    Settings(SettingsArgs),
}

/// Arguments for `connect`.
#[derive(Debug, Clone, Args)]
pub struct ConnectArgs {
    /// Destination address, e.g. `foo@ad` or `871813768`.
    pub destination: String,
    /// Start a file transfer session.
    #[arg(long, default_value_t = false)]
    pub file_transfer: bool,
    /// Start the session in fullscreen mode.
    #[arg(long, default_value_t = false)]
    pub fullscreen: bool,
    /// Hide window title and toolbar.
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}

/// Arguments for `install`.
#[derive(Debug, Clone, Args)]
pub struct InstallArgs {
    /// Target installation directory.
    pub location: String,
    /// Start AnyDesk together with Windows.
    #[arg(long, default_value_t = false)]
    pub start_with_win: bool,
}

/// Arguments for `register-license`.
#[derive(Debug, Clone, Args)]
#[command(after_help = "The key is passed to AnyDesk on standard input, never as an argument.")]
pub struct RegisterLicenseArgs {
    /// License key.
    pub key: String,
}

/// Arguments for `settings`.
#[derive(Debug, Clone, Args)]
#[command(
    after_help = "Known pages: ui, security, alias, privacy, video, capture, audio, connection, filetransfer, recording, printer, wol, license, about."
)]
pub struct SettingsArgs {
    /// Settings page; unknown pages are passed through unchanged.
    pub page: String,
    /// Open a plain AnyDesk window.
    #[arg(long, default_value_t = false)]
    pub plain: bool,
    /// Show the custom disclaimer.
    #[arg(long, default_value_t = false)]
    pub disclaimer: bool,
    /// Show the advertisement page.
    #[arg(long = "show-advert", default_value_t = false)]
    pub advertisement: bool,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "granny",
    author,
    version,
    about = "Drive the AnyDesk command-line interface",
    long_about = None
)]
pub struct GrannyArgs {
    /// Path to granny.toml (overrides GRANNY_CONFIG_PATH).
    #[arg(long = "config", global = true)]
    pub config_override: Option<PathBuf>,
    /// Name or path of the AnyDesk executable (overrides the config file).
    #[arg(long = "runnable", global = true)]
    pub runnable_override: Option<PathBuf>,
    /// Print the planned invocation as JSON without starting AnyDesk.
    #[arg(long, global = true, default_value_t = false)]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: CliCommand,
}

impl GrannyArgs {
    /// Build an `Invocation` from CLI args and environment variables.
    pub fn into_invocation(self) -> Result<Invocation> {
        let (config_path, config_source) = resolve_config_path(self.config_override)?;
        Ok(Invocation {
            config_path,
            config_source,
            runnable_override: self.runnable_override,
            dry_run: self.dry_run,
            command: self.command,
        })
    }
}
