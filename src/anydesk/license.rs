use std::io::Cursor;

use crate::lib::errors::AnyDeskError;

use super::{options::RunOptions, runner};

/// The only argument passed for license registration; the key goes to stdin.
pub const REGISTER_LICENSE_FLAG: &str = "--register--license";

/// Register `key` with the local AnyDesk installation.
pub fn register_license(key: &str) -> Result<(), AnyDeskError> {
    register_license_with(key, RunOptions::DEFAULT)
}

/// Like [`register_license`] but with a caller-chosen runnable and output.
///
/// Any input stream already set on `options` is replaced by the key.
pub fn register_license_with(key: &str, options: RunOptions<'_>) -> Result<(), AnyDeskError> {
    let args = build_register_license_args(key)?;
    let options = options.with_input(Cursor::new(key.to_owned().into_bytes()));
    runner::run(args, options)
}

pub fn build_register_license_args(key: &str) -> Result<Vec<String>, AnyDeskError> {
    if key.is_empty() {
        return Err(AnyDeskError::KeyEmpty);
    }
    Ok(vec![REGISTER_LICENSE_FLAG.to_string()])
}
