//! wecom-bot: WeCom group-robot webhook client
//!
//! Entry point for the wecom-bot application.

use std::process::ExitCode;

use wecom_bot::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Command::Init { output } = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    let message = match run::build_message(&cli.command) {
        Ok(Some(message)) => message,
        Ok(None) => return exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            return exit_code::runtime_error();
        }
    };

    run_application(config, message)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs the send with the given configuration.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ValidatedConfig, message: wecom_bot::webhook::Message) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(config, message)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
