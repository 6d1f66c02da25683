use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Personnel {
        add,
        phone,
        supervisor,
        supervisor_phone,
        company,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        match add {
            Some(name) => RosterLogic::upsert(
                &mut pool,
                name,
                phone.as_deref(),
                supervisor.as_deref(),
                supervisor_phone.as_deref(),
                company.as_deref(),
            )?,
            None => RosterLogic::list(&mut pool)?,
        }
    }
    Ok(())
}
