//! CLI entrypoint module structure.
use std::{io::Write, path::Path};

use anyhow::Result;
use serde_json::json;
use tracing::warn;

use crate::{
    anydesk::{
        self, build_connect_args, build_install_args, build_register_license_args,
        build_settings_args, ConnectOptions, InstallOptions, RunOptions, SettingsOptions,
        SettingsPage,
    },
    config::GrannyConfig,
};

pub mod args;
pub mod exit;
pub mod profile;

pub use args::{
    CliCommand, ConnectArgs, GrannyArgs, InstallArgs, RegisterLicenseArgs, SettingsArgs,
};
pub use exit::CliExit;
pub use profile::{resolve_config_path, Invocation};

/// Result of a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `--dry-run`: JSON payload describing what would run.
    Planned(String),
    /// AnyDesk ran and exited cleanly.
    Completed,
}

/// Execute a CLI command, forwarding AnyDesk's output to `output`.
pub fn execute_cli_command<'a>(
    invocation: Invocation,
    config: &GrannyConfig,
    output: impl Write + Send + 'a,
) -> Result<Outcome> {
    let mut run = RunOptions::default().with_output(output);
    run.runnable = invocation
        .runnable_override
        .or_else(|| config.anydesk.runnable.clone());
    let dry_run = invocation.dry_run;

    match invocation.command {
        CliCommand::Connect(args) => {
            let defaults = config.connect;
            let options = ConnectOptions {
                run,
                file_transfer: args.file_transfer || defaults.file_transfer,
                fullscreen: args.fullscreen || defaults.fullscreen,
                plain: args.plain || defaults.plain,
            };
            if dry_run {
                let planned = build_connect_args(&args.destination, &options)?;
                return planned_payload(options.run.resolved_runnable(), &planned, None);
            }
            anydesk::connect(&args.destination, Some(options))?;
        }
        CliCommand::Install(args) => {
            let options = InstallOptions {
                run,
                start_with_win: args.start_with_win || config.install.start_with_win,
            };
            if dry_run {
                let planned = build_install_args(&args.location, &options)?;
                return planned_payload(options.run.resolved_runnable(), &planned, None);
            }
            anydesk::install(&args.location, Some(options))?;
        }
        CliCommand::RegisterLicense(args) => {
            if dry_run {
                let planned = build_register_license_args(&args.key)?;
                return planned_payload(run.resolved_runnable(), &planned, Some("license key"));
            }
            anydesk::register_license_with(&args.key, run)?;
        }
        CliCommand::Settings(args) => {
            let page: SettingsPage = args.page.parse()?;
            if !page.is_known() {
                warn!(
                    target: "granny::cli",
                    page = %page,
                    "Unknown settings page; passing it to AnyDesk unchanged"
                );
            }
            let defaults = config.settings;
            let options = SettingsOptions {
                run,
                plain: args.plain || defaults.plain,
                disclaimer: args.disclaimer || defaults.disclaimer,
                advertisement: args.advertisement || defaults.advertisement,
            };
            if dry_run {
                let planned = build_settings_args(&page, &options);
                return planned_payload(options.run.resolved_runnable(), &planned, None);
            }
            anydesk::open_settings(&page, Some(options))?;
        }
    }

    Ok(Outcome::Completed)
}

/// Format the `--dry-run` payload. Stdin content is described, never printed.
fn planned_payload(runnable: &Path, args: &[String], stdin: Option<&str>) -> Result<Outcome> {
    let payload = json!({
        "status": "planned",
        "runnable": runnable.to_string_lossy(),
        "args": args,
        "stdin": stdin,
    });
    Ok(Outcome::Planned(serde_json::to_string_pretty(&payload)?))
}
