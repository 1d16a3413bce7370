//! AnyDesk command-line operations: argument builders and the process runner.
mod connect;
mod install;
mod license;
mod options;
mod runner;
mod settings;

pub use connect::{build_connect_args, connect, ConnectOptions};
pub use install::{build_install_args, install, InstallOptions};
pub use license::{
    build_register_license_args, register_license, register_license_with, REGISTER_LICENSE_FLAG,
};
pub use options::{resolve, RunOptions, DEFAULT_RUNNABLE};
pub use runner::run;
pub use settings::{build_settings_args, open_settings, SettingsOptions, SettingsPage};
