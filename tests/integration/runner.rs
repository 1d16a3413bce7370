use anyhow::Result;
use granny::{
    connect, install, open_settings, register_license_with, run, AnyDeskError, ConnectOptions,
    InstallOptions, RunOptions, SettingsOptions, SettingsPage,
};

use crate::common::{serial, FakeAnyDesk};

#[test]
fn connect_delivers_argv_and_merges_output() -> Result<()> {
    let _guard = serial();
    let fake = FakeAnyDesk::new(0)?;
    let mut output = Vec::new();

    connect(
        "foo@ad",
        Some(ConnectOptions {
            run: RunOptions::default()
                .with_runnable(&fake.runnable)
                .with_output(&mut output),
            file_transfer: true,
            plain: true,
            ..Default::default()
        }),
    )?;

    assert_eq!(
        fake.recorded_args()?,
        vec!["foo@ad", "--file-transfer", "--plain"]
    );
    assert_eq!(fake.recorded_stdin()?, "");
    let output = String::from_utf8(output)?;
    assert!(output.contains("anydesk stdout"), "output: {output}");
    assert!(output.contains("anydesk stderr"), "output: {output}");
    Ok(())
}

#[test]
fn register_license_sends_key_on_stdin_only() -> Result<()> {
    let _guard = serial();
    let fake = FakeAnyDesk::new(0)?;

    register_license_with(
        "ABC-123",
        RunOptions::default().with_runnable(&fake.runnable),
    )?;

    assert_eq!(fake.recorded_args()?, vec!["--register--license"]);
    assert_eq!(fake.recorded_stdin()?, "ABC-123");
    Ok(())
}

#[test]
fn install_keeps_location_as_one_argument() -> Result<()> {
    let _guard = serial();
    let fake = FakeAnyDesk::new(0)?;
    let location = fake.dir().join("Program Files").display().to_string();

    install(
        &location,
        Some(InstallOptions {
            run: RunOptions::default().with_runnable(&fake.runnable),
            start_with_win: true,
        }),
    )?;

    assert_eq!(
        fake.recorded_args()?,
        vec!["--install".to_string(), location, "--start-with-win".to_string()]
    );
    Ok(())
}

#[test]
fn settings_output_is_discarded_without_writer() -> Result<()> {
    let _guard = serial();
    let fake = FakeAnyDesk::new(0)?;

    open_settings(
        &SettingsPage::Security,
        Some(SettingsOptions {
            run: RunOptions::default().with_runnable(&fake.runnable),
            disclaimer: true,
            ..Default::default()
        }),
    )?;

    assert_eq!(
        fake.recorded_args()?,
        vec!["--settings", "security", "--disclaimer"]
    );
    Ok(())
}

#[test]
fn non_zero_exit_is_reported_with_code() -> Result<()> {
    let _guard = serial();
    let fake = FakeAnyDesk::new(3)?;
    let mut output = Vec::new();

    let err = run(
        ["--settings", "made-up"],
        RunOptions::default()
            .with_runnable(&fake.runnable)
            .with_output(&mut output),
    )
    .expect_err("exit code 3 must fail");

    match err {
        AnyDeskError::CommandFailed {
            runnable,
            exit_code,
        } => {
            assert_eq!(runnable, fake.runnable);
            assert_eq!(exit_code, Some(3));
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(String::from_utf8(output)?.contains("anydesk stderr"));
    Ok(())
}

#[test]
fn validation_failure_never_starts_the_runnable() -> Result<()> {
    let _guard = serial();
    let fake = FakeAnyDesk::new(0)?;

    let err = connect(
        "",
        Some(ConnectOptions {
            run: RunOptions::default().with_runnable(&fake.runnable),
            ..Default::default()
        }),
    )
    .expect_err("empty destination must fail");
    assert!(matches!(err, AnyDeskError::DestinationEmpty));

    let err = install(
        "",
        Some(InstallOptions {
            run: RunOptions::default().with_runnable(&fake.runnable),
            ..Default::default()
        }),
    )
    .expect_err("empty location must fail");
    assert!(matches!(err, AnyDeskError::LocationEmpty));

    let err = register_license_with("", RunOptions::default().with_runnable(&fake.runnable))
        .expect_err("empty key must fail");
    assert!(matches!(err, AnyDeskError::KeyEmpty));

    assert!(!fake.was_started(), "runnable must not be spawned");
    Ok(())
}
