use crate::lib::errors::AnyDeskError;

use super::{
    options::{resolve, RunOptions},
    runner,
};

/// Options for [`connect`].
#[derive(Debug, Default)]
pub struct ConnectOptions<'a> {
    pub run: RunOptions<'a>,
    /// Start a file transfer session.
    pub file_transfer: bool,
    /// Start the session in fullscreen mode.
    pub fullscreen: bool,
    /// Start the session without window title and toolbar.
    pub plain: bool,
}

impl ConnectOptions<'_> {
    pub const DEFAULT: ConnectOptions<'static> = ConnectOptions {
        run: RunOptions::DEFAULT,
        file_transfer: false,
        fullscreen: false,
        plain: false,
    };
}

/// Open a session to `destination`, an AnyDesk address such as `foo@ad` or `871813768`.
///
/// See <https://support.anydesk.com/Command_Line_Interface>.
pub fn connect(destination: &str, options: Option<ConnectOptions<'_>>) -> Result<(), AnyDeskError> {
    let options = resolve(options);
    let args = build_connect_args(destination, &options)?;
    runner::run(args, options.run)
}

/// `[destination, --file-transfer?, --fullscreen?, --plain?]`
pub fn build_connect_args(
    destination: &str,
    options: &ConnectOptions<'_>,
) -> Result<Vec<String>, AnyDeskError> {
    if destination.is_empty() {
        return Err(AnyDeskError::DestinationEmpty);
    }
    let mut args = vec![destination.to_string()];
    if options.file_transfer {
        args.push("--file-transfer".into());
    }
    if options.fullscreen {
        args.push("--fullscreen".into());
    }
    if options.plain {
        args.push("--plain".into());
    }
    Ok(args)
}
