use std::{convert::Infallible, fmt, str::FromStr};

use crate::lib::errors::AnyDeskError;

use super::{
    options::{resolve, RunOptions},
    runner,
};

/// A settings page of AnyDesk.
///
/// Unknown tokens are kept in [`SettingsPage::Other`] and passed through to
/// AnyDesk as-is; it decides whether they are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingsPage {
    Ui,
    Security,
    Alias,
    Privacy,
    Video,
    Capture,
    Audio,
    Connection,
    FileTransfer,
    Recording,
    Printer,
    WakeOnLan,
    License,
    About,
    Other(String),
}

impl SettingsPage {
    /// Every page AnyDesk documents, in menu order.
    pub const KNOWN: [SettingsPage; 14] = [
        SettingsPage::Ui,
        SettingsPage::Security,
        SettingsPage::Alias,
        SettingsPage::Privacy,
        SettingsPage::Video,
        SettingsPage::Capture,
        SettingsPage::Audio,
        SettingsPage::Connection,
        SettingsPage::FileTransfer,
        SettingsPage::Recording,
        SettingsPage::Printer,
        SettingsPage::WakeOnLan,
        SettingsPage::License,
        SettingsPage::About,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SettingsPage::Ui => "ui",
            SettingsPage::Security => "security",
            SettingsPage::Alias => "alias",
            SettingsPage::Privacy => "privacy",
            SettingsPage::Video => "video",
            SettingsPage::Capture => "capture",
            SettingsPage::Audio => "audio",
            SettingsPage::Connection => "connection",
            SettingsPage::FileTransfer => "filetransfer",
            SettingsPage::Recording => "recording",
            SettingsPage::Printer => "printer",
            SettingsPage::WakeOnLan => "wol",
            SettingsPage::License => "license",
            SettingsPage::About => "about",
            SettingsPage::Other(token) => token.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SettingsPage::Other(_))
    }
}

impl FromStr for SettingsPage {
    type Err = Infallible;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(Self::KNOWN
            .into_iter()
            .find(|page| page.as_str() == token)
            .unwrap_or_else(|| SettingsPage::Other(token.to_string())))
    }
}

impl fmt::Display for SettingsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`open_settings`].
#[derive(Debug, Default)]
pub struct SettingsOptions<'a> {
    pub run: RunOptions<'a>,
    /// Open a plain AnyDesk window.
    pub plain: bool,
    /// Show the custom disclaimer.
    pub disclaimer: bool,
    /// Show the advertisement page.
    pub advertisement: bool,
}

impl SettingsOptions<'_> {
    pub const DEFAULT: SettingsOptions<'static> = SettingsOptions {
        run: RunOptions::DEFAULT,
        plain: false,
        disclaimer: false,
        advertisement: false,
    };
}

/// Open a settings page window in AnyDesk.
///
/// See <https://support.anydesk.com/Command_Line_Interface>.
pub fn open_settings(
    page: &SettingsPage,
    options: Option<SettingsOptions<'_>>,
) -> Result<(), AnyDeskError> {
    let options = resolve(options);
    runner::run(build_settings_args(page, &options), options.run)
}

pub fn build_settings_args(page: &SettingsPage, options: &SettingsOptions<'_>) -> Vec<String> {
    let mut args = vec!["--settings".to_string(), page.to_string()];
    if options.plain {
        args.push("--plain".into());
    }
    if options.disclaimer {
        args.push("--disclaimer".into());
    }
    if options.advertisement {
        args.push("--show-advert".into());
    }
    args
}
