use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        //
        // 1) PRINT
        //
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("# {}", path.display());
                println!("{}", content);
            } else {
                warning(format!(
                    "No config file at {}. Run 'camplog init' first.",
                    path.display()
                ));
            }
        }

        //
        // 2) CHECK
        //
        if *check {
            if cfg.database.trim().is_empty() {
                return Err(AppError::Config("'database' is empty".into()));
            }
            if cfg.default_duration_hours <= 0 {
                return Err(AppError::Config(
                    "'default_duration_hours' must be positive".into(),
                ));
            }
            if cfg.soon_window_minutes <= 0 {
                return Err(AppError::Config(
                    "'soon_window_minutes' must be positive".into(),
                ));
            }
            success("Configuration is valid.");
        }

        if !(*print_config || *check) {
            info("Nothing to do: specify --print or --check.");
        }
    }
    Ok(())
}
