use std::io;

use anyhow::Context;
use outfitter_core::config::{AppConfig, LoadOptions};
use outfitter_core::ApplicationError;
use tracing::info;

use crate::commands::CommandResult;
use crate::logging;
use crate::shell::{Shell, ShellSettings};

/// Runs the interactive session on the process's stdin and stdout.
pub fn run(options: LoadOptions) -> CommandResult {
    match session(options) {
        Ok(cycles) => {
            info!(event_name = "outfitter.command.run_finished", cycles, "session finished");
            CommandResult::text(0, "")
        }
        Err(error) => {
            let (user_message, exit_code) = error
                .downcast_ref::<ApplicationError>()
                .map(|app_error| (app_error.user_message(), app_error.exit_code()))
                .unwrap_or(("The session stopped unexpectedly.", 1));
            CommandResult::text(exit_code, format!("\n{user_message}\n{error:#}"))
        }
    }
}

fn session(options: LoadOptions) -> anyhow::Result<u64> {
    let config = AppConfig::load(options).map_err(ApplicationError::from)?;
    logging::init(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), ShellSettings::from_config(&config));
    let cycles = shell
        .run()
        .map_err(ApplicationError::from)
        .context("interactive session ended before exit was chosen")?;

    Ok(cycles)
}
