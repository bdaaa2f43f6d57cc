//! seatlogger library root.
//! Exposes the CLI parser, the high-level run() function and the collector.

pub mod cli;
pub mod collector;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Summary => cli::commands::summary::handle(cfg),
        Commands::Seats { .. } => cli::commands::seats::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `init` writes the config file, it must not need a loadable one
    if let Commands::Init { .. } = cli.command {
        return cli::commands::init::handle(&cli);
    }

    // 3️⃣ load config once
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 4️⃣ apply the --log override to the log of the selected mode
    if let Some(log) = &cli.log {
        match cli.command {
            Commands::Seats { .. } | Commands::Show { seats: true, .. } => {
                cfg.seats_log = log.clone();
            }
            _ => cfg.summary_log = log.clone(),
        }
    }

    dispatch(&cli, &cfg)
}
