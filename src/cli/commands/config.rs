use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config { print_config } = cmd else {
        return Ok(());
    };

    if !*print_config {
        info(format!("Per-user configuration file: {}", Config::config_file().display()));
        info("Use --print to show the effective configuration.");
        return Ok(());
    }

    let yaml = serde_yaml::to_string(cfg)
        .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
    println!("{yaml}");
    Ok(())
}
