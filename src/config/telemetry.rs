use std::path::Path;

use tracing::{debug, info};

use super::{GrannyConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_default_missing(path: &Path) {
    debug!(
        target: "granny::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &GrannyConfig) {
    let path = config
        .source_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    let runnable = config
        .anydesk
        .runnable
        .as_deref()
        .map(|runnable| runnable.display().to_string())
        .unwrap_or_default();
    info!(
        target: "granny::config",
        path = %path,
        runnable = %runnable,
        connect_plain = config.connect.plain,
        connect_fullscreen = config.connect.fullscreen,
        install_start_with_win = config.install.start_with_win,
        "Configuration file loaded successfully"
    );
}
