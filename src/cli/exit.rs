//! Map CLI failures to process exit codes.
use std::process::ExitCode;

use anyhow::Error;

use crate::lib::errors::{AnyDeskError, ConfigError};

pub const EXIT_VALIDATION: u8 = 2;
pub const EXIT_CONFIG: u8 = 3;
pub const EXIT_SPAWN: u8 = 4;

/// Failure reported by the `granny` binary.
#[derive(Debug)]
pub struct CliExit {
    message: String,
    exit_code: u8,
}

impl CliExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            exit_code: exit_code_for(&err),
            message: format!("{err:?}"),
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

/// Validation → 2, config → 3, spawn → 4, the child's own exit code when it
/// fits in `1..=255`, otherwise 1.
fn exit_code_for(err: &Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return EXIT_CONFIG;
    }
    match err.downcast_ref::<AnyDeskError>() {
        Some(anydesk) if anydesk.is_validation() => EXIT_VALIDATION,
        Some(AnyDeskError::Spawn { .. }) => EXIT_SPAWN,
        Some(AnyDeskError::CommandFailed {
            exit_code: Some(code),
            ..
        }) => u8::try_from(*code).ok().filter(|code| *code != 0).unwrap_or(1),
        _ => 1,
    }
}
