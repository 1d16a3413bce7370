use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_granny");

static SPAWN_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that write scripts and spawn processes.
///
/// A script still open for writing in one thread while another forks fails
/// to exec with ETXTBSY.
pub fn serial() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Shell script standing in for the AnyDesk runnable.
///
/// It records its argv (one per line) and stdin, prints one line to stdout
/// and one to stderr, then exits with the configured code.
pub struct FakeAnyDesk {
    dir: TempDir,
    pub runnable: PathBuf,
}

impl FakeAnyDesk {
    pub fn new(exit_code: i32) -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create temporary directory")?;
        let runnable = dir.path().join("anydesk");
        let record_dir = dir.path().display().to_string();
        let script = format!(
            "#!/bin/sh\n\
             : > '{record_dir}/args.txt'\n\
             for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{record_dir}/args.txt'; done\n\
             cat > '{record_dir}/stdin.txt'\n\
             echo 'anydesk stdout'\n\
             echo 'anydesk stderr' >&2\n\
             exit {exit_code}\n"
        );
        fs::write(&runnable, script).context("failed to write fake runnable")?;
        make_executable(&runnable)?;
        Ok(Self { dir, runnable })
    }

    pub fn recorded_args(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(self.dir.path().join("args.txt"))
            .context("fake runnable did not record its arguments")?;
        Ok(content.lines().map(str::to_string).collect())
    }

    pub fn recorded_stdin(&self) -> Result<String> {
        fs::read_to_string(self.dir.path().join("stdin.txt"))
            .context("fake runnable did not record its stdin")
    }

    pub fn was_started(&self) -> bool {
        self.dir.path().join("args.txt").exists()
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions).context("failed to mark fake runnable executable")
}
