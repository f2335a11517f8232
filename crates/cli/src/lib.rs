pub mod commands;
pub mod input;
pub mod logging;
pub mod render;
pub mod shell;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use outfitter_core::config::{ConfigOverrides, LoadOptions};
use outfitter_core::TemperatureBand;

use crate::commands::recommend::RecommendArgs;

#[derive(Debug, Parser)]
#[command(
    name = "outfitter",
    about = "Weather-based outfit recommender",
    long_about = "Classify the weather you enter into a temperature band, show tips and condition \
                  advice, and build an outfit from the band's catalogs.",
    after_help = "Examples:\n  outfitter\n  outfitter recommend --city Oslo --temperature -3 --condition \"light snow\" --json\n  outfitter catalog --band hot\n  outfitter doctor --json"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to an outfitter.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Disable ANSI colors in console output")]
    no_color: bool,
    #[arg(long, global = true, help = "Log level for stderr diagnostics (error..trace)")]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Milliseconds per loading-indicator tick (0-5000)")]
    loading_delay_ms: Option<u64>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Start the interactive recommendation session (default)")]
    Run,
    #[command(about = "Build one recommendation without prompting")]
    Recommend(RecommendArgs),
    #[command(about = "List the outfit, accessory and footwear catalogs")]
    Catalog {
        #[arg(long, help = "Only list one band: cold, moderate or hot")]
        band: Option<TemperatureBand>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and catalog data")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            require_file: self.config.is_some(),
            overrides: ConfigOverrides {
                log_level: self.log_level.clone(),
                color: self.no_color.then_some(false),
                loading_delay_ms: self.loading_delay_ms,
            },
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = cli.load_options();

    let result = match cli.command.unwrap_or(Command::Run) {
        Command::Run => commands::run::run(options),
        Command::Recommend(args) => commands::recommend::run(options, args),
        Command::Catalog { band, json } => commands::catalog::run(band, json),
        Command::Config => commands::CommandResult::text(0, commands::config::run(options)),
        Command::Doctor { json } => {
            commands::CommandResult::text(0, commands::doctor::run(options, json))
        }
    };

    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    ExitCode::from(result.exit_code)
}
