use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::ReturnLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Back { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ReturnLogic::apply(&mut pool, *id)?;
    }
    Ok(())
}
