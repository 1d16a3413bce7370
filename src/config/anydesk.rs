use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// `[anydesk]` section: which executable to launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnyDeskSection {
    pub runnable: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawAnyDeskSection {
    pub runnable: Option<PathBuf>,
}

pub fn parse_anydesk_section(
    raw: Option<RawAnyDeskSection>,
    path: &Path,
) -> Result<AnyDeskSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    if let Some(runnable) = raw.runnable.as_deref() {
        validate_runnable(path, runnable)?;
    }
    Ok(AnyDeskSection {
        runnable: raw.runnable,
    })
}

fn validate_runnable(path: &Path, runnable: &Path) -> Result<(), ConfigError> {
    if runnable.to_string_lossy().trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "anydesk.runnable",
            message: "Provide the name or path of the AnyDesk executable".into(),
        });
    }
    Ok(())
}
