use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = cli.config.clone().unwrap_or_else(Config::config_file);

    Config::init(&path, force)?;

    success(format!("Config file: {}", path.display()));
    info("Edit target_room and rooms to choose what gets collected.");
    Ok(())
}
