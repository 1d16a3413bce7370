use crate::lib::errors::AnyDeskError;

use super::{
    options::{resolve, RunOptions},
    runner,
};

/// Options for [`install`].
#[derive(Debug, Default)]
pub struct InstallOptions<'a> {
    pub run: RunOptions<'a>,
    /// Start AnyDesk together with Windows.
    pub start_with_win: bool,
}

impl InstallOptions<'_> {
    pub const DEFAULT: InstallOptions<'static> = InstallOptions {
        run: RunOptions::DEFAULT,
        start_with_win: false,
    };
}

/// Install AnyDesk into `location`, which must not be empty.
pub fn install(location: &str, options: Option<InstallOptions<'_>>) -> Result<(), AnyDeskError> {
    let options = resolve(options);
    let args = build_install_args(location, &options)?;
    runner::run(args, options.run)
}

pub fn build_install_args(
    location: &str,
    options: &InstallOptions<'_>,
) -> Result<Vec<String>, AnyDeskError> {
    if location.is_empty() {
        return Err(AnyDeskError::LocationEmpty);
    }
    let mut args = vec!["--install".to_string(), location.to_string()];
    if options.start_with_win {
        args.push("--start-with-win".into());
    }
    Ok(args)
}
