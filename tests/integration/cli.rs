use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use anyhow::Result;
use serde_json::Value;
use tempfile::tempdir;

use crate::common::{serial, FakeAnyDesk, BINARY_PATH};

fn granny(cwd: &Path, args: &[&str]) -> Output {
    Command::new(BINARY_PATH)
        .args(args)
        .current_dir(cwd)
        .env_remove("GRANNY_CONFIG_PATH")
        .env("RUST_LOG", "warn")
        .output()
        .expect("granny should start")
}

#[test]
fn help_lists_subcommands() {
    let _guard = serial();
    let temp = tempdir().expect("can create temporary directory");
    let output = granny(temp.path(), &["--help"]);
    assert!(output.status.success(), "granny --help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["connect", "install", "register-license", "settings", "--dry-run"] {
        assert!(
            stdout.contains(needle),
            "--help should list {needle}, got:\n{stdout}"
        );
    }
}

#[test]
fn dry_run_prints_planned_argv() -> Result<()> {
    let _guard = serial();
    let temp = tempdir()?;
    let output = granny(
        temp.path(),
        &["--dry-run", "connect", "foo@ad", "--fullscreen", "--plain"],
    );
    assert!(output.status.success(), "dry-run should succeed: {output:?}");

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["status"], "planned");
    assert_eq!(payload["runnable"], "anydesk");
    assert_eq!(
        payload["args"],
        serde_json::json!(["foo@ad", "--fullscreen", "--plain"])
    );
    Ok(())
}

#[test]
fn default_config_file_in_working_directory_is_used() -> Result<()> {
    let _guard = serial();
    let temp = tempdir()?;
    fs::write(
        temp.path().join("granny.toml"),
        "[anydesk]\nrunnable = \"/opt/anydesk/anydesk\"\n\n[settings]\nadvertisement = true\n",
    )?;

    let output = granny(temp.path(), &["--dry-run", "settings", "about"]);
    assert!(output.status.success(), "dry-run should succeed: {output:?}");

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["runnable"], "/opt/anydesk/anydesk");
    assert_eq!(
        payload["args"],
        serde_json::json!(["--settings", "about", "--show-advert"])
    );
    Ok(())
}

#[test]
fn empty_destination_exits_with_validation_code() {
    let _guard = serial();
    let temp = tempdir().expect("can create temporary directory");
    let output = granny(temp.path(), &["connect", ""]);
    assert_eq!(output.status.code(), Some(2), "output: {output:?}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("destination must not be empty"));
}

#[test]
fn missing_explicit_config_exits_with_config_code() {
    let _guard = serial();
    let temp = tempdir().expect("can create temporary directory");
    let output = granny(
        temp.path(),
        &["--config", "absent.toml", "--dry-run", "connect", "foo@ad"],
    );
    assert_eq!(output.status.code(), Some(3), "output: {output:?}");
}

#[test]
fn missing_runnable_exits_with_spawn_code() {
    let _guard = serial();
    let temp = tempdir().expect("can create temporary directory");
    let output = granny(
        temp.path(),
        &["--runnable", "/nonexistent/granny-anydesk", "connect", "foo@ad"],
    );
    assert_eq!(output.status.code(), Some(4), "output: {output:?}");
}

#[test]
fn register_license_forwards_output_and_stdin() -> Result<()> {
    let _guard = serial();
    let fake = FakeAnyDesk::new(0)?;
    let runnable = fake.runnable.display().to_string();

    let output = granny(
        fake.dir(),
        &["--runnable", &runnable, "register-license", "ABC-123"],
    );
    assert!(output.status.success(), "run should succeed: {output:?}");

    assert_eq!(fake.recorded_args()?, vec!["--register--license"]);
    assert_eq!(fake.recorded_stdin()?, "ABC-123");
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("anydesk stdout"), "stdout: {stdout}");
    assert!(stdout.contains("anydesk stderr"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn child_exit_code_becomes_granny_exit_code() -> Result<()> {
    let _guard = serial();
    let fake = FakeAnyDesk::new(5)?;
    let runnable = fake.runnable.display().to_string();

    let output = granny(
        fake.dir(),
        &["--runnable", &runnable, "install", "/opt/anydesk"],
    );
    assert_eq!(output.status.code(), Some(5), "output: {output:?}");
    assert_eq!(fake.recorded_args()?, vec!["--install", "/opt/anydesk"]);
    Ok(())
}
