//! Default flag sections for connect, install and settings.
use serde::Deserialize;

/// `[connect]` defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectDefaults {
    pub file_transfer: bool,
    pub fullscreen: bool,
    pub plain: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawConnectSection {
    pub file_transfer: Option<bool>,
    pub fullscreen: Option<bool>,
    pub plain: Option<bool>,
}

/// `[install]` defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallDefaults {
    pub start_with_win: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawInstallSection {
    pub start_with_win: Option<bool>,
}

/// `[settings]` defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsDefaults {
    pub plain: bool,
    pub disclaimer: bool,
    pub advertisement: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawSettingsSection {
    pub plain: Option<bool>,
    pub disclaimer: Option<bool>,
    pub advertisement: Option<bool>,
}

pub fn parse_connect_section(raw: Option<RawConnectSection>) -> ConnectDefaults {
    let raw = raw.unwrap_or_default();
    ConnectDefaults {
        file_transfer: raw.file_transfer.unwrap_or(false),
        fullscreen: raw.fullscreen.unwrap_or(false),
        plain: raw.plain.unwrap_or(false),
    }
}

pub fn parse_install_section(raw: Option<RawInstallSection>) -> InstallDefaults {
    let raw = raw.unwrap_or_default();
    InstallDefaults {
        start_with_win: raw.start_with_win.unwrap_or(false),
    }
}

pub fn parse_settings_section(raw: Option<RawSettingsSection>) -> SettingsDefaults {
    let raw = raw.unwrap_or_default();
    SettingsDefaults {
        plain: raw.plain.unwrap_or(false),
        disclaimer: raw.disclaimer.unwrap_or(false),
        advertisement: raw.advertisement.unwrap_or(false),
    }
}
