//! Entry point for granny.
use std::{io, process::ExitCode};

use clap::Parser;
use granny::{
    cli::{execute_cli_command, CliExit, GrannyArgs, Outcome},
    config::GrannyConfig,
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;
    let args = GrannyArgs::parse();
    let invocation = args.into_invocation().map_err(CliExit::from_error)?;
    let config = GrannyConfig::load(invocation.config_path.clone(), invocation.config_source)
        .map_err(CliExit::from_error)?;

    match execute_cli_command(invocation, &config, io::stdout()).map_err(CliExit::from_error)? {
        Outcome::Planned(payload) => println!("{payload}"),
        Outcome::Completed => {}
    }
    Ok(())
}
