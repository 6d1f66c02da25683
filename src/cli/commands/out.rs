use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkout::CheckoutLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out {
        name,
        destination,
        hours,
        until,
        phone,
        supervisor,
        supervisor_phone,
        company,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        CheckoutLogic::apply(
            &mut pool,
            cfg,
            name,
            destination,
            *hours,
            until.as_deref(),
            phone.as_deref(),
            supervisor.as_deref(),
            supervisor_phone.as_deref(),
            company.as_deref(),
        )?;
    }
    Ok(())
}
