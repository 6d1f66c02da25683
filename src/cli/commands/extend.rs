use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::extend::ExtendLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Extend { id, hours } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ExtendLogic::apply(&mut pool, *id, *hours)?;
    }
    Ok(())
}
