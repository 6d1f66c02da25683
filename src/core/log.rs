use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET};

/// High-level business logic for the `log` command.
pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(pool)?;

        if rows.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        for (ts, message) in rows {
            println!("{}{}{}  {}", GREY, ts, RESET, message);
        }
        Ok(())
    }
}
