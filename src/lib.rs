//! Library crate root: AnyDesk operations, configuration and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod anydesk;
pub mod cli;
pub mod config;

pub use anydesk::{
    connect, install, open_settings, register_license, register_license_with, run,
    ConnectOptions, InstallOptions, RunOptions, SettingsOptions, SettingsPage,
};
pub use lib_mod::errors::AnyDeskError;
